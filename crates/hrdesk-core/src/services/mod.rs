//! Services module

pub mod attachments;
pub mod auth;
pub mod employees;
pub mod excel;
pub mod notifier;
pub mod pdf;
pub mod report;
pub mod validation;

pub use attachments::{AttachmentStore, DocumentInfo};
pub use auth::{
    authenticate, ensure_seed_account, register, AccountRepository, LoginRequest, NewAccount,
    RegisterRequest, SqliteAccountRepository,
};
pub use employees::{
    CreateEmployeeRequest, EmployeeRepository, EmployeeService, SearchQuery,
    SqliteEmployeeRepository,
};
pub use excel::EmployeeExcelReport;
pub use notifier::{NoopNotifier, Notifier, NOTIFICATION_TITLE};
pub use pdf::{EmployeePdfReport, RenderedPdf};
pub use report::{export_employees, ReportFormat, ReportMetadata, ReportRow, REPORT_HEADERS};
