//! Data models for HRDesk

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Fixed access class of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Hr,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Hr => "hr",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Role::Employee),
            "hr" => Ok(Role::Hr),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Login identity (`users` table)
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
}

/// Account without the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            role: account.role,
        }
    }
}

/// Personnel record joined with the owning account's username
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub passport: String,
    pub birth_year: Option<i32>,
    pub experience_years: Option<i32>,
    pub hire_date: Option<NaiveDate>,
    pub phone_mobile: Option<String>,
    pub phone_work: Option<String>,
    pub vacation_days_left: Option<i32>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Profile fields supplied when an employee is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub passport: String,
    pub birth_year: Option<i32>,
    pub experience_years: Option<i32>,
    pub hire_date: Option<NaiveDate>,
    pub phone_mobile: Option<String>,
    pub phone_work: Option<String>,
    pub vacation_days_left: Option<i32>,
}

/// Partial update of a personnel record.
///
/// Only fields that are `Some` are written. A blank phone clears the number. The owning account is not
/// part of the patch and can never be reassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub passport: Option<String>,
    pub birth_year: Option<i32>,
    pub experience_years: Option<i32>,
    pub hire_date: Option<NaiveDate>,
    pub phone_mobile: Option<String>,
    pub phone_work: Option<String>,
    pub vacation_days_left: Option<i32>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self == &EmployeePatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: 1,
            user_id: 2,
            username: "ivan".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            position: "Engineer".to_string(),
            passport: "1234 567890".to_string(),
            birth_year: Some(1990),
            experience_years: Some(5),
            hire_date: NaiveDate::from_ymd_opt(2020, 3, 1),
            phone_mobile: Some("+79001234567".to_string()),
            phone_work: None,
            vacation_days_left: Some(28),
        }
    }

    #[test]
    fn test_role_round_trip_through_str() {
        assert_eq!("hr".parse::<Role>().unwrap(), Role::Hr);
        assert_eq!("employee".parse::<Role>().unwrap(), Role::Employee);
        assert_eq!(Role::Hr.to_string(), "hr");
        assert!("HR".parse::<Role>().is_err());
        assert!(Role::try_from("admin".to_string()).is_err());
    }

    #[test]
    fn test_account_response_hides_hash() {
        let account = Account {
            id: 3,
            username: "da".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: Role::Hr,
        };
        let response = AccountResponse::from(account);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"role\":\"hr\""));
    }

    #[test]
    fn test_empty_patch() {
        assert!(EmployeePatch::default().is_empty());
        let patch = EmployeePatch {
            position: Some("Lead".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_employee().full_name(), "Ivan Petrov");
    }
}
