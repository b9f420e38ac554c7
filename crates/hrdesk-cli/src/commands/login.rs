//! Login command
//!
//! Verifies the given credentials and shows the account.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use super::session::current_account;
use super::Context;
use crate::output::{print_single, print_success};
use hrdesk_core::AccountResponse;

/// Account row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct AccountRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Username")]
    pub username: String,
    #[tabled(rename = "Role")]
    pub role: String,
}

impl From<AccountResponse> for AccountRow {
    fn from(account: AccountResponse) -> Self {
        Self {
            id: account.id,
            username: account.username,
            role: account.role.to_string(),
        }
    }
}

pub async fn execute(ctx: &Context) -> Result<()> {
    let account = current_account(ctx).await?;

    print_success(
        &format!("Logged in as {} ({})", account.username, account.role),
        ctx.quiet,
    );
    print_single(&AccountRow::from(AccountResponse::from(account)), ctx.format)?;

    Ok(())
}
