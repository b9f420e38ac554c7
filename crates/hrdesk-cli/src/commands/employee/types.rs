//! Employee command types
//!
//! Clap definitions and table rows for employee commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::display_opt;
use hrdesk_core::services::report::format_hire_date;
use hrdesk_core::Employee;

/// Optional profile fields shared by `add` and `update`
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Year of birth
    #[arg(long)]
    pub birth_year: Option<i32>,

    /// Years of work experience
    #[arg(long)]
    pub experience: Option<i32>,

    /// Hire date (YYYY-MM-DD or DD.MM.YYYY)
    #[arg(long)]
    pub hire_date: Option<String>,

    /// Mobile phone, digits with optional leading +; empty clears it
    #[arg(long)]
    pub mobile: Option<String>,

    /// Work phone, digits with optional leading +; empty clears it
    #[arg(long)]
    pub work_phone: Option<String>,

    /// Remaining vacation days
    #[arg(long)]
    pub vacation: Option<i32>,
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// List employees, optionally filtered
    List {
        /// Search text: empty lists all, digits match an ID exactly,
        /// anything else matches username, first or last name
        #[arg(default_value = "")]
        query: String,
    },

    /// Show an employee record
    Show {
        /// Employee ID
        id: i64,
    },

    /// Show the record of the logged-in account
    Me,

    /// Create an employee account and record
    Add {
        /// Login of the new account
        #[arg(long)]
        username: String,

        /// Initial password of the new account
        #[arg(long)]
        new_password: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Job position
        #[arg(long)]
        position: String,

        /// Passport number, e.g. "1234 567890"
        #[arg(long)]
        passport: String,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Update fields of an employee record
    Update {
        /// Employee ID
        id: i64,

        /// New first name
        #[arg(long)]
        first_name: Option<String>,

        /// New last name
        #[arg(long)]
        last_name: Option<String>,

        /// New job position
        #[arg(long)]
        position: Option<String>,

        /// New passport number
        #[arg(long)]
        passport: Option<String>,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Delete an employee record together with its account
    Delete {
        /// Employee ID
        id: i64,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Employee row for list display
#[derive(Debug, Serialize, Tabled)]
pub struct EmployeeRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Username")]
    pub username: String,
    #[tabled(rename = "Full name")]
    pub full_name: String,
    #[tabled(rename = "Position")]
    pub position: String,
    #[tabled(rename = "Hire date")]
    pub hire_date: String,
    #[tabled(rename = "Vacation")]
    pub vacation_days_left: String,
}

impl From<Employee> for EmployeeRow {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            username: employee.username,
            position: employee.position,
            hire_date: format_hire_date(employee.hire_date),
            vacation_days_left: display_opt(employee.vacation_days_left),
        }
    }
}

/// Full employee record for single display
#[derive(Debug, Serialize, Tabled)]
pub struct EmployeeDetailRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Username")]
    pub username: String,
    #[tabled(rename = "First name")]
    pub first_name: String,
    #[tabled(rename = "Last name")]
    pub last_name: String,
    #[tabled(rename = "Position")]
    pub position: String,
    #[tabled(rename = "Passport")]
    pub passport: String,
    #[tabled(rename = "Born")]
    pub birth_year: String,
    #[tabled(rename = "Experience")]
    pub experience_years: String,
    #[tabled(rename = "Hire date")]
    pub hire_date: String,
    #[tabled(rename = "Mobile")]
    pub phone_mobile: String,
    #[tabled(rename = "Work phone")]
    pub phone_work: String,
    #[tabled(rename = "Vacation")]
    pub vacation_days_left: String,
}

impl From<Employee> for EmployeeDetailRow {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            username: employee.username,
            first_name: employee.first_name,
            last_name: employee.last_name,
            position: employee.position,
            passport: employee.passport,
            birth_year: display_opt(employee.birth_year),
            experience_years: display_opt(employee.experience_years),
            hire_date: format_hire_date(employee.hire_date),
            phone_mobile: employee.phone_mobile.unwrap_or_default(),
            phone_work: employee.phone_work.unwrap_or_default(),
            vacation_days_left: display_opt(employee.vacation_days_left),
        }
    }
}
