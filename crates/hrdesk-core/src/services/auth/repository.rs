//! Account repository
//!
//! Abstracts account storage for testability using trait-based dependency injection.

use async_trait::async_trait;

use super::types::NewAccount;
use crate::error::{Error, Result};
use crate::models::Account;

/// Account repository trait - abstracts database operations for testability
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by exact (case-sensitive) username
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>>;

    /// Check if username exists
    async fn username_exists(&self, username: &str) -> Result<bool>;

    /// Insert a new account; a taken username is `DuplicateUsername`
    async fn create_account(&self, account: NewAccount) -> Result<Account>;
}

/// SQLite implementation of AccountRepository
pub struct SqliteAccountRepository<'a> {
    pool: &'a sqlx::SqlitePool,
}

impl<'a> SqliteAccountRepository<'a> {
    pub fn new(pool: &'a sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<'a> AccountRepository for SqliteAccountRepository<'a> {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(self.pool)
            .await?;
        Ok(account)
    }

    async fn username_exists(&self, username: &str) -> Result<bool> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(self.pool)
            .await?;
        Ok(count.0 > 0)
    }

    async fn create_account(&self, account: NewAccount) -> Result<Account> {
        let mut conn = self.pool.acquire().await?;
        let id = insert_account(&mut *conn, &account).await?;

        Ok(Account {
            id,
            username: account.username,
            password_hash: account.password_hash,
            role: account.role,
        })
    }
}

/// Insert an account row on an open connection or transaction, returning its id
pub(crate) async fn insert_account(
    conn: &mut sqlx::SqliteConnection,
    account: &NewAccount,
) -> Result<i64> {
    let result = sqlx::query("INSERT INTO users (username, password_hash, role) VALUES (?, ?, ?)")
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(account.role.as_str())
        .execute(&mut *conn)
        .await
        .map_err(|e| map_unique_violation(e, &account.username))?;

    Ok(result.last_insert_rowid())
}

/// Translate a UNIQUE constraint failure on `users.username` into `DuplicateUsername`
pub(crate) fn map_unique_violation(err: sqlx::Error, username: &str) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Error::DuplicateUsername(username.to_string())
        }
        _ => Error::Database(err),
    }
}
