//! Authentication and role checks for commands

use anyhow::{anyhow, bail, Result};
use hrdesk_core::services::auth::authenticate;
use hrdesk_core::{Account, Employee, LoginRequest, Role};

use super::Context;

/// Authenticate the acting account from `--user` / `--password`
pub async fn current_account(ctx: &Context) -> Result<Account> {
    let (Some(username), Some(password)) = (
        ctx.credentials.username.as_ref(),
        ctx.credentials.password.as_ref(),
    ) else {
        bail!("Credentials required: pass --user and --password or set HRDESK_USER and HRDESK_PASSWORD");
    };

    let request = LoginRequest {
        username: username.clone(),
        password: password.clone(),
    };

    authenticate(&ctx.accounts(), &request)
        .await?
        .ok_or_else(|| anyhow!("Invalid username or password"))
}

/// Authenticate and require the `hr` role
pub async fn require_hr(ctx: &Context) -> Result<Account> {
    let account = current_account(ctx).await?;
    if account.role != Role::Hr {
        bail!("Permission denied: '{}' does not have the hr role", account.username);
    }
    Ok(account)
}

/// Load an employee record or fail with a not-found message
pub async fn load_employee(ctx: &Context, id: i64) -> Result<Employee> {
    ctx.employees()
        .get(id)
        .await?
        .ok_or_else(|| anyhow!("Employee {} not found", id))
}

/// Authenticate and allow HR, or the employee the record belongs to
pub async fn require_hr_or_owner(ctx: &Context, id: i64) -> Result<Employee> {
    let account = current_account(ctx).await?;

    if account.role == Role::Hr {
        return load_employee(ctx, id).await;
    }

    match ctx.employees().get_by_account(account.id).await? {
        Some(own) if own.id == id => Ok(own),
        _ => bail!("Permission denied: record {} belongs to another employee", id),
    }
}
