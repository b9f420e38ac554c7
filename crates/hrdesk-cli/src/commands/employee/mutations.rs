//! Employee mutation commands
//!
//! Create, update, and delete operations for employee records. Success
//! messages come from the service notifier.

use anyhow::Result;

use super::types::EmployeeDetailRow;
use crate::commands::session::{load_employee, require_hr};
use crate::commands::Context;
use crate::output::{print_error, print_single};
use hrdesk_core::{CreateEmployeeRequest, EmployeePatch, NewEmployee};

pub async fn add_employee(
    ctx: &Context,
    username: String,
    password: String,
    profile: NewEmployee,
) -> Result<()> {
    require_hr(ctx).await?;

    let employee = ctx
        .employees()
        .create(CreateEmployeeRequest {
            username,
            password,
            profile,
        })
        .await?;

    if !ctx.quiet {
        print_single(&EmployeeDetailRow::from(employee), ctx.format)?;
    }

    Ok(())
}

pub async fn update_employee(ctx: &Context, id: i64, patch: EmployeePatch) -> Result<()> {
    require_hr(ctx).await?;

    let employee = ctx.employees().update(id, patch).await?;

    if !ctx.quiet {
        print_single(&EmployeeDetailRow::from(employee), ctx.format)?;
    }

    Ok(())
}

pub async fn delete_employee(ctx: &Context, id: i64, force: bool) -> Result<()> {
    require_hr(ctx).await?;

    if !force {
        // Show record before deletion
        let employee = load_employee(ctx, id).await?;
        print_single(&EmployeeDetailRow::from(employee), ctx.format)?;
        print_error("Use --force to confirm deletion");
        return Ok(());
    }

    ctx.employees().delete(id).await?;

    Ok(())
}
