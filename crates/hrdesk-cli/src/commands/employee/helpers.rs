//! Employee helper functions
//!
//! Argument conversion shared by employee commands.

use anyhow::Result;
use chrono::NaiveDate;

use super::types::ProfileArgs;
use hrdesk_core::{EmployeePatch, NewEmployee};

/// Parse date string supporting ISO and day-first formats
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    if s == "today" {
        return Ok(chrono::Local::now().date_naive());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .map_err(|_| anyhow::anyhow!("Invalid date format: {}. Use YYYY-MM-DD or DD.MM.YYYY", s))
}

fn parse_opt_date(s: Option<&str>) -> Result<Option<NaiveDate>> {
    s.map(parse_date).transpose()
}

pub fn build_new_employee(
    first_name: String,
    last_name: String,
    position: String,
    passport: String,
    profile: ProfileArgs,
) -> Result<NewEmployee> {
    Ok(NewEmployee {
        first_name,
        last_name,
        position,
        passport,
        birth_year: profile.birth_year,
        experience_years: profile.experience,
        hire_date: parse_opt_date(profile.hire_date.as_deref())?,
        phone_mobile: profile.mobile,
        phone_work: profile.work_phone,
        vacation_days_left: profile.vacation,
    })
}

pub fn build_patch(
    first_name: Option<String>,
    last_name: Option<String>,
    position: Option<String>,
    passport: Option<String>,
    profile: ProfileArgs,
) -> Result<EmployeePatch> {
    Ok(EmployeePatch {
        first_name,
        last_name,
        position,
        passport,
        birth_year: profile.birth_year,
        experience_years: profile.experience,
        hire_date: parse_opt_date(profile.hire_date.as_deref())?,
        phone_mobile: profile.mobile,
        phone_work: profile.work_phone,
        vacation_days_left: profile.vacation,
    })
}
