//! Auth module
//!
//! Authentication and registration using trait-based dependency injection for testability.
//!
//! ## Structure
//! - `types.rs` - Request data types
//! - `repository.rs` - AccountRepository trait and SQLite implementation
//! - `service.rs` - Business logic (testable, storage-independent)

pub mod repository;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use repository::{AccountRepository, SqliteAccountRepository};
pub use service::{authenticate, ensure_seed_account, register};
pub use types::{LoginRequest, NewAccount, RegisterRequest};
