//! Employees module
//!
//! Personnel record CRUD and search.
//!
//! ## Structure
//! - `types.rs` - Request types and the search query parser
//! - `repository.rs` - EmployeeRepository trait and SQLite implementation
//! - `service.rs` - EmployeeService facade (validation, notifications, attachment cleanup)

pub mod repository;
pub mod service;
pub mod types;


pub use repository::{EmployeeRepository, SqliteEmployeeRepository};
pub use service::EmployeeService;
pub use types::{CreateEmployeeRequest, SearchQuery};
