//! # hrdesk-core
//!
//! Core business logic for HRDesk, the personnel record manager.
//!
//! This crate provides:
//! - Database operations (`db` module)
//! - Data models (`models` module)
//! - Business logic services (`services` module)
//! - Password hashing (`auth` module)
//! - Path and bootstrap settings (`config` module)
//! - Unified error handling (`error` module)

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

// Re-exports for convenience
pub use config::{AppPaths, SeedAccount};
pub use db::Database;
pub use error::{Error, Result};

// Re-export commonly used types from models
pub use models::{Account, AccountResponse, Employee, EmployeePatch, NewEmployee, Role};

// Re-export commonly used types from services
pub use services::{
    authenticate, ensure_seed_account, export_employees, AttachmentStore, CreateEmployeeRequest,
    DocumentInfo, EmployeeService, LoginRequest, Notifier, ReportFormat, ReportMetadata,
    SqliteAccountRepository, SqliteEmployeeRepository,
};
