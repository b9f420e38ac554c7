//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod employee;
pub mod files;
pub mod login;
pub mod report;
pub mod session;

use crate::output::{ConsoleNotifier, OutputFormat};
use hrdesk_core::services::auth::SqliteAccountRepository;
use hrdesk_core::services::employees::{EmployeeService, SqliteEmployeeRepository};
use hrdesk_core::{AppPaths, AttachmentStore, Database};

/// Credentials given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Shared context for all commands
pub struct Context {
    pub db: Database,
    pub paths: AppPaths,
    pub format: OutputFormat,
    pub quiet: bool,
    pub credentials: Credentials,
}

impl Context {
    pub fn accounts(&self) -> SqliteAccountRepository<'_> {
        SqliteAccountRepository::new(&self.db.pool)
    }

    pub fn attachments(&self) -> AttachmentStore {
        AttachmentStore::from_paths(&self.paths)
    }

    /// Employee service wired to the console notifier and the attachment store
    pub fn employees(&self) -> EmployeeService<SqliteEmployeeRepository<'_>> {
        EmployeeService::new(
            SqliteEmployeeRepository::new(&self.db.pool),
            Box::new(ConsoleNotifier::new(self.quiet)),
        )
        .with_attachments(self.attachments())
    }
}
