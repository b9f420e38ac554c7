//! Employee service
//!
//! Facade used by the presentation layer: validates input, delegates to the
//! repository and reports changes to the injected notifier.

use super::repository::EmployeeRepository;
use super::types::{CreateEmployeeRequest, SearchQuery};
use crate::auth::hash_password;
use crate::error::Result;
use crate::models::{Employee, EmployeePatch, Role};
use crate::services::attachments::AttachmentStore;
use crate::services::auth::NewAccount;
use crate::services::notifier::{Notifier, NOTIFICATION_TITLE};
use crate::services::validation::{
    validate_new_employee, validate_password, validate_patch, validate_username,
};

pub struct EmployeeService<R> {
    repo: R,
    notifier: Box<dyn Notifier>,
    attachments: Option<AttachmentStore>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: R, notifier: Box<dyn Notifier>) -> Self {
        Self {
            repo,
            notifier,
            attachments: None,
        }
    }

    /// Purge photos and documents of deleted employees from this store
    pub fn with_attachments(mut self, store: AttachmentStore) -> Self {
        self.attachments = Some(store);
        self
    }

    pub fn attachments(&self) -> Option<&AttachmentStore> {
        self.attachments.as_ref()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Create an `employee` account and its personnel record in one transaction
    pub async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee> {
        validate_username(&request.username)?;
        validate_password(&request.password)?;
        validate_new_employee(&request.profile)?;

        let password_hash = hash_password(&request.password)?;
        let account = NewAccount {
            username: request.username,
            password_hash,
            role: Role::Employee,
        };

        let employee = self.repo.create_with_account(account, request.profile).await?;

        log::info!("Created employee {}: {}", employee.id, employee.full_name());
        self.notifier.notify(
            NOTIFICATION_TITLE,
            &format!("Created employee {}", employee.full_name()),
        );
        Ok(employee)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Employee>> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_by_account(&self, account_id: i64) -> Result<Option<Employee>> {
        self.repo.find_by_account(account_id).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Employee>> {
        let employees = self.repo.search(&SearchQuery::parse(query)).await?;
        log::info!("Found {} employees (search='{}')", employees.len(), query);
        Ok(employees)
    }

    pub async fn update(&self, id: i64, patch: EmployeePatch) -> Result<Employee> {
        validate_patch(&patch)?;

        let employee = self.repo.update(id, &patch).await?;

        log::info!("Updated employee {}", employee.id);
        self.notifier.notify(
            NOTIFICATION_TITLE,
            &format!("Updated employee {}", employee.full_name()),
        );
        Ok(employee)
    }

    /// Delete a personnel record together with its account.
    ///
    /// Attachment cleanup runs after the commit; its failure is only logged.
    pub async fn delete(&self, id: i64) -> Result<Employee> {
        let employee = self.repo.delete(id).await?;

        if let Some(store) = &self.attachments {
            if let Err(e) = store.purge(id).await {
                log::warn!("Failed to remove attachments of employee {}: {}", id, e);
            }
        }

        log::info!("Deleted employee {}", id);
        self.notifier.notify(
            NOTIFICATION_TITLE,
            &format!("Deleted employee {}", employee.full_name()),
        );
        Ok(employee)
    }
}
