//! Personnel record repository
//!
//! Every mutating operation runs inside one transaction. Returning early with
//! `?` drops the transaction, which rolls it back before the caller sees the
//! error.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::types::SearchQuery;
use crate::error::{Error, Result};
use crate::models::{Employee, EmployeePatch, NewEmployee};
use crate::services::auth::repository::insert_account;
use crate::services::auth::NewAccount;

/// Employee repository trait - abstracts database operations for testability
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert an account and its personnel record atomically
    async fn create_with_account(&self, account: NewAccount, profile: NewEmployee)
        -> Result<Employee>;

    /// Find a personnel record by its own ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>>;

    /// Find the personnel record owned by an account
    async fn find_by_account(&self, account_id: i64) -> Result<Option<Employee>>;

    /// Records matching the query, ordered by ID ascending
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Employee>>;

    /// Apply a partial update; `NotFound` if the ID does not exist
    async fn update(&self, id: i64, patch: &EmployeePatch) -> Result<Employee>;

    /// Delete the record and its owning account; returns the deleted record
    async fn delete(&self, id: i64) -> Result<Employee>;
}

const SELECT_EMPLOYEES: &str = r#"
    SELECT e.id, e.user_id, u.username, e.first_name, e.last_name, e.position,
           e.passport, e.birth_year, e.experience_years, e.hire_date,
           e.phone_mobile, e.phone_work, e.vacation_days_left
    FROM employees e
    JOIN users u ON u.id = e.user_id
"#;

/// SQLite implementation of EmployeeRepository
pub struct SqliteEmployeeRepository<'a> {
    pool: &'a sqlx::SqlitePool,
}

impl<'a> SqliteEmployeeRepository<'a> {
    pub fn new(pool: &'a sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

async fn fetch_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Employee>> {
    let sql = format!("{} WHERE e.id = ?", SELECT_EMPLOYEES);
    let employee = sqlx::query_as(&sql).bind(id).fetch_optional(&mut *conn).await?;
    Ok(employee)
}

/// Blank phone numbers are stored as NULL
pub(super) fn phone_or_null(phone: &str) -> Option<String> {
    let phone = phone.trim();
    (!phone.is_empty()).then(|| phone.to_string())
}

fn employee_not_found(id: i64) -> Error {
    Error::not_found(format!("employee {}", id))
}

#[async_trait]
impl<'a> EmployeeRepository for SqliteEmployeeRepository<'a> {
    async fn create_with_account(
        &self,
        account: NewAccount,
        profile: NewEmployee,
    ) -> Result<Employee> {
        let mut tx = self.pool.begin().await?;

        let user_id = insert_account(&mut tx, &account).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO employees (
                user_id, first_name, last_name, position, passport, birth_year,
                experience_years, hire_date, phone_mobile, phone_work, vacation_days_left
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.position)
        .bind(&profile.passport)
        .bind(profile.birth_year)
        .bind(profile.experience_years)
        .bind(profile.hire_date)
        .bind(profile.phone_mobile.as_deref().and_then(phone_or_null))
        .bind(profile.phone_work.as_deref().and_then(phone_or_null))
        .bind(profile.vacation_days_left)
        .execute(&mut *tx)
        .await?;

        let employee = fetch_by_id(&mut tx, result.last_insert_rowid())
            .await?
            .ok_or(Error::Database(sqlx::Error::RowNotFound))?;

        tx.commit().await?;
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let mut conn = self.pool.acquire().await?;
        fetch_by_id(&mut conn, id).await
    }

    async fn find_by_account(&self, account_id: i64) -> Result<Option<Employee>> {
        let sql = format!("{} WHERE e.user_id = ?", SELECT_EMPLOYEES);
        let employee = sqlx::query_as(&sql)
            .bind(account_id)
            .fetch_optional(self.pool)
            .await?;
        Ok(employee)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Employee>> {
        let employees: Vec<Employee> = match query {
            SearchQuery::Unmatchable => return Ok(Vec::new()),
            SearchQuery::Id(id) => {
                let sql = format!("{} WHERE e.id = ? ORDER BY e.id", SELECT_EMPLOYEES);
                sqlx::query_as(&sql).bind(*id).fetch_all(self.pool).await?
            }
            // SQLite lower() only folds ASCII, so text matching happens here
            SearchQuery::All | SearchQuery::Text(_) => {
                let sql = format!("{} ORDER BY e.id", SELECT_EMPLOYEES);
                let all: Vec<Employee> = sqlx::query_as(&sql).fetch_all(self.pool).await?;
                all.into_iter().filter(|e| query.matches(e)).collect()
            }
        };

        Ok(employees)
    }

    async fn update(&self, id: i64, patch: &EmployeePatch) -> Result<Employee> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Err(employee_not_found(id));
        }

        if !patch.is_empty() {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE employees SET ");
            {
                let mut fields = builder.separated(", ");

                if let Some(v) = &patch.first_name {
                    fields.push("first_name = ").push_bind_unseparated(v.clone());
                }
                if let Some(v) = &patch.last_name {
                    fields.push("last_name = ").push_bind_unseparated(v.clone());
                }
                if let Some(v) = &patch.position {
                    fields.push("position = ").push_bind_unseparated(v.clone());
                }
                if let Some(v) = &patch.passport {
                    fields.push("passport = ").push_bind_unseparated(v.clone());
                }
                if let Some(v) = patch.birth_year {
                    fields.push("birth_year = ").push_bind_unseparated(v);
                }
                if let Some(v) = patch.experience_years {
                    fields.push("experience_years = ").push_bind_unseparated(v);
                }
                if let Some(v) = patch.hire_date {
                    fields.push("hire_date = ").push_bind_unseparated(v);
                }
                if let Some(v) = &patch.phone_mobile {
                    fields.push("phone_mobile = ").push_bind_unseparated(phone_or_null(v));
                }
                if let Some(v) = &patch.phone_work {
                    fields.push("phone_work = ").push_bind_unseparated(phone_or_null(v));
                }
                if let Some(v) = patch.vacation_days_left {
                    fields.push("vacation_days_left = ").push_bind_unseparated(v);
                }
            }

            builder.push(" WHERE id = ").push_bind(id);
            builder.build().execute(&mut *tx).await?;
        }

        let employee = fetch_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| employee_not_found(id))?;

        tx.commit().await?;
        Ok(employee)
    }

    async fn delete(&self, id: i64) -> Result<Employee> {
        let mut tx = self.pool.begin().await?;

        let employee = fetch_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| employee_not_found(id))?;

        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(employee.user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(employee)
    }
}
