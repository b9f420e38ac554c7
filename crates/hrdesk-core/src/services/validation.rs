//! Field validation for employee data
//!
//! The rules mirror the desktop forms: required strings must be non-blank,
//! phones are `+?` followed by 5-15 digits, passports are four digits, an
//! optional space, then six digits.

use chrono::{Datelike, Local};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::models::{EmployeePatch, NewEmployee};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_BIRTH_YEAR: i32 = 1900;
pub const MAX_EXPERIENCE_YEARS: i32 = 100;
pub const MAX_VACATION_DAYS: i32 = 365;

fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Password policy: at least 8 characters, with letters and digits
pub fn validate_password(password: &str) -> Result<()> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(long_enough && has_letter && has_digit) {
        return Err(Error::validation(
            "Password must be at least 8 characters and contain letters and digits",
        ));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<()> {
    require(username, "Username")
}

/// Optional `+`, then 5 to 15 ASCII digits
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{5,15}$").unwrap());

/// Four-digit series, optional whitespace, six-digit number
static PASSPORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}\s?[0-9]{6}$").unwrap());

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub fn is_valid_passport(passport: &str) -> bool {
    PASSPORT_PATTERN.is_match(passport)
}

fn check_phone(phone: &str, field: &str) -> Result<()> {
    if !is_valid_phone(phone) {
        return Err(Error::validation(format!(
            "{} must be 5-15 digits with an optional leading +",
            field
        )));
    }
    Ok(())
}

fn check_passport(passport: &str) -> Result<()> {
    if !is_valid_passport(passport) {
        return Err(Error::validation("Passport must look like 1234 567890"));
    }
    Ok(())
}

fn check_range(value: i32, min: i32, max: i32, field: &str) -> Result<()> {
    if value < min || value > max {
        return Err(Error::validation(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}

fn check_birth_year(year: i32) -> Result<()> {
    check_range(year, MIN_BIRTH_YEAR, Local::now().year(), "Birth year")
}

/// Validate a full profile before creation
pub fn validate_new_employee(profile: &NewEmployee) -> Result<()> {
    require(&profile.first_name, "First name")?;
    require(&profile.last_name, "Last name")?;
    require(&profile.position, "Position")?;
    require(&profile.passport, "Passport")?;
    check_passport(&profile.passport)?;

    if let Some(year) = profile.birth_year {
        check_birth_year(year)?;
    }
    if let Some(years) = profile.experience_years {
        check_range(years, 0, MAX_EXPERIENCE_YEARS, "Experience")?;
    }
    if let Some(days) = profile.vacation_days_left {
        check_range(days, 0, MAX_VACATION_DAYS, "Vacation days")?;
    }
    if let Some(phone) = profile.phone_mobile.as_deref().filter(|p| !p.trim().is_empty()) {
        check_phone(phone, "Mobile phone")?;
    }
    if let Some(phone) = profile.phone_work.as_deref().filter(|p| !p.trim().is_empty()) {
        check_phone(phone, "Work phone")?;
    }
    Ok(())
}

/// Validate only the fields a patch sets
pub fn validate_patch(patch: &EmployeePatch) -> Result<()> {
    if let Some(v) = &patch.first_name {
        require(v, "First name")?;
    }
    if let Some(v) = &patch.last_name {
        require(v, "Last name")?;
    }
    if let Some(v) = &patch.position {
        require(v, "Position")?;
    }
    if let Some(v) = &patch.passport {
        require(v, "Passport")?;
        check_passport(v)?;
    }
    if let Some(year) = patch.birth_year {
        check_birth_year(year)?;
    }
    if let Some(years) = patch.experience_years {
        check_range(years, 0, MAX_EXPERIENCE_YEARS, "Experience")?;
    }
    if let Some(days) = patch.vacation_days_left {
        check_range(days, 0, MAX_VACATION_DAYS, "Vacation days")?;
    }
    if let Some(phone) = patch.phone_mobile.as_deref().filter(|p| !p.trim().is_empty()) {
        check_phone(phone, "Mobile phone")?;
    }
    if let Some(phone) = patch.phone_work.as_deref().filter(|p| !p.trim().is_empty()) {
        check_phone(phone, "Work phone")?;
    }
    Ok(())
}
