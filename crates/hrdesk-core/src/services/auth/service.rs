//! Auth business logic
//!
//! Authentication and registration, independent of the storage backend.

use super::repository::AccountRepository;
use super::types::{LoginRequest, NewAccount, RegisterRequest};
use crate::auth::{hash_password, verify_password};
use crate::config::SeedAccount;
use crate::error::{Error, Result};
use crate::models::Account;

/// Authenticate by username and password.
///
/// Unknown user and wrong password both return `Ok(None)`.
pub async fn authenticate<R: AccountRepository + ?Sized>(
    repo: &R,
    request: &LoginRequest,
) -> Result<Option<Account>> {
    let account = repo.find_by_username(&request.username).await?;

    match account {
        Some(account) if verify_password(&request.password, &account.password_hash) => {
            log::info!("Authenticated: {}", account.username);
            Ok(Some(account))
        }
        _ => {
            log::warn!("Authentication failed: {}", request.username);
            Ok(None)
        }
    }
}

/// Register a new account with the given role
pub async fn register<R: AccountRepository + ?Sized>(
    repo: &R,
    request: RegisterRequest,
) -> Result<Account> {
    if request.username.is_empty() {
        return Err(Error::validation("Username is required"));
    }

    if repo.username_exists(&request.username).await? {
        return Err(Error::DuplicateUsername(request.username));
    }

    let password_hash = hash_password(&request.password)?;

    let account = repo
        .create_account(NewAccount {
            username: request.username,
            password_hash,
            role: request.role,
        })
        .await?;

    log::info!("Registered account: {} ({})", account.username, account.role);
    Ok(account)
}

/// Create the well-known seed account unless it already exists.
///
/// Returns `true` when the account was created by this call.
pub async fn ensure_seed_account<R: AccountRepository + ?Sized>(
    repo: &R,
    seed: &SeedAccount,
) -> Result<bool> {
    let request = RegisterRequest {
        username: seed.username.clone(),
        password: seed.password.clone(),
        role: seed.role,
    };

    match register(repo, request).await {
        Ok(_) => Ok(true),
        Err(Error::DuplicateUsername(_)) => Ok(false),
        Err(e) => Err(e),
    }
}
