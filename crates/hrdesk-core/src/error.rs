//! Unified error handling for hrdesk-core

use thiserror::Error;

/// Core error type for hrdesk-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

/// Result type alias for hrdesk-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a report rendering error
    pub fn report(msg: impl Into<String>) -> Self {
        Error::Report(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Create an already-exists error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Error::AlreadyExists(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    pub fn is_duplicate_username(&self) -> bool {
        matches!(self, Error::DuplicateUsername(_))
    }
}
