//! Employee request and query types

use serde::Deserialize;

use crate::models::{Employee, NewEmployee};

/// Request to create an employee account together with its personnel record
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    pub username: String,
    pub password: String,
    pub profile: NewEmployee,
}

/// Parsed search string.
///
/// - empty string: every record
/// - only ASCII digits: exact id match
/// - anything else: case-insensitive substring over username, first and last name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    All,
    Id(i64),
    /// All digits, but too large to be an id
    Unmatchable,
    Text(String),
}

impl SearchQuery {
    pub fn parse(query: &str) -> Self {
        if query.is_empty() {
            return SearchQuery::All;
        }

        if query.bytes().all(|b| b.is_ascii_digit()) {
            return match query.parse::<i64>() {
                Ok(id) => SearchQuery::Id(id),
                Err(_) => SearchQuery::Unmatchable,
            };
        }

        SearchQuery::Text(query.to_lowercase())
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            SearchQuery::All => true,
            SearchQuery::Id(id) => employee.id == *id,
            SearchQuery::Unmatchable => false,
            SearchQuery::Text(needle) => [
                &employee.username,
                &employee.first_name,
                &employee.last_name,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i64, username: &str, first: &str, last: &str) -> Employee {
        Employee {
            id,
            user_id: id + 100,
            username: username.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            position: "Clerk".to_string(),
            passport: "1234 567890".to_string(),
            birth_year: None,
            experience_years: None,
            hire_date: None,
            phone_mobile: None,
            phone_work: None,
            vacation_days_left: None,
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(SearchQuery::parse(""), SearchQuery::All);
        assert_eq!(SearchQuery::parse("7"), SearchQuery::Id(7));
        assert_eq!(SearchQuery::parse("007"), SearchQuery::Id(7));
        assert_eq!(SearchQuery::parse("99999999999999999999999"), SearchQuery::Unmatchable);
        assert_eq!(SearchQuery::parse("-7"), SearchQuery::Text("-7".to_string()));
        assert_eq!(SearchQuery::parse(" 7"), SearchQuery::Text(" 7".to_string()));
        assert_eq!(SearchQuery::parse("AnNa"), SearchQuery::Text("anna".to_string()));
    }

    #[test]
    fn test_id_query_is_exact() {
        let query = SearchQuery::parse("7");
        assert!(query.matches(&employee(7, "x", "y", "z")));
        assert!(!query.matches(&employee(17, "x", "y", "z")));
        assert!(!query.matches(&employee(1, "user7", "Agent7", "Bond7")));
    }

    #[test]
    fn test_text_query_matches_any_of_three_fields() {
        let query = SearchQuery::parse("an");
        assert!(query.matches(&employee(1, "anna", "Maria", "Kim")));
        assert!(query.matches(&employee(2, "x", "Svetlana", "Kim")));
        assert!(query.matches(&employee(3, "x", "Petr", "Ivanov")));
        assert!(!query.matches(&employee(4, "petr", "Petr", "Sidorov")));
    }

    #[test]
    fn test_text_query_unicode_case_folding() {
        let query = SearchQuery::parse("ИВАН");
        assert!(query.matches(&employee(1, "x", "Иван", "Петров")));
    }

    #[test]
    fn test_text_query_treats_wildcards_literally() {
        let query = SearchQuery::parse("%");
        assert!(!query.matches(&employee(1, "anna", "Anna", "Kim")));
        assert!(query.matches(&employee(2, "100%", "Anna", "Kim")));
    }

    #[test]
    fn test_position_is_not_searched() {
        let query = SearchQuery::parse("clerk");
        assert!(!query.matches(&employee(1, "anna", "Anna", "Kim")));
    }
}
