//! Employee query commands
//!
//! Read operations for employee records.

use anyhow::{anyhow, Result};

use super::types::{EmployeeDetailRow, EmployeeRow};
use crate::commands::session::{current_account, load_employee, require_hr};
use crate::commands::Context;
use crate::output::{print_output, print_single};

pub async fn list_employees(ctx: &Context, query: String) -> Result<()> {
    require_hr(ctx).await?;

    let employees = ctx.employees().search(&query).await?;

    let rows: Vec<EmployeeRow> = employees.into_iter().map(EmployeeRow::from).collect();
    print_output(&rows, ctx.format)?;

    Ok(())
}

pub async fn show_employee(ctx: &Context, id: i64) -> Result<()> {
    require_hr(ctx).await?;

    let employee = load_employee(ctx, id).await?;
    print_single(&EmployeeDetailRow::from(employee), ctx.format)?;

    Ok(())
}

pub async fn show_own_record(ctx: &Context) -> Result<()> {
    let account = current_account(ctx).await?;

    let employee = ctx
        .employees()
        .get_by_account(account.id)
        .await?
        .ok_or_else(|| anyhow!("No employee record for account '{}'", account.username))?;

    print_single(&EmployeeDetailRow::from(employee), ctx.format)?;

    Ok(())
}
