//! Employee commands
//!
//! Commands for managing employee records: list, show, me, add, update, delete.

pub mod helpers;
mod mutations;
mod queries;
mod types;

use anyhow::Result;

use crate::commands::Context;

// Re-export public types
pub use types::EmployeeAction;

pub async fn execute(ctx: &Context, action: EmployeeAction) -> Result<()> {
    match action {
        EmployeeAction::List { query } => queries::list_employees(ctx, query).await,
        EmployeeAction::Show { id } => queries::show_employee(ctx, id).await,
        EmployeeAction::Me => queries::show_own_record(ctx).await,
        EmployeeAction::Add {
            username,
            new_password,
            first_name,
            last_name,
            position,
            passport,
            profile,
        } => {
            mutations::add_employee(
                ctx,
                username,
                new_password,
                helpers::build_new_employee(first_name, last_name, position, passport, profile)?,
            )
            .await
        }
        EmployeeAction::Update {
            id,
            first_name,
            last_name,
            position,
            passport,
            profile,
        } => {
            let patch = helpers::build_patch(first_name, last_name, position, passport, profile)?;
            mutations::update_employee(ctx, id, patch).await
        }
        EmployeeAction::Delete { id, force } => mutations::delete_employee(ctx, id, force).await,
    }
}
