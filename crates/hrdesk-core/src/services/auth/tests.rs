//! Auth module tests
//!
//! Unit tests using mock repository for testability.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::repository::AccountRepository;
use super::service::{authenticate, ensure_seed_account, register};
use super::types::{LoginRequest, NewAccount, RegisterRequest};
use crate::auth::hash_password;
use crate::config::SeedAccount;
use crate::error::{Error, Result};
use crate::models::{Account, Role};

// ============================================================================
// Mock Repository
// ============================================================================

/// Mock implementation of AccountRepository for testing
pub struct MockAccountRepository {
    accounts: Mutex<HashMap<i64, Account>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
        }
    }

    /// Add an account with a real hash of `password`
    pub fn with_account(self, id: i64, username: &str, password: &str, role: Role) -> Self {
        let account = Account {
            id,
            username: username.to_string(),
            password_hash: hash_password(password).unwrap(),
            role,
        };
        self.accounts.lock().unwrap().insert(id, account);
        self
    }

    fn count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn username_exists(&self, username: &str) -> Result<bool> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.values().any(|a| a.username == username))
    }

    async fn create_account(&self, account: NewAccount) -> Result<Account> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.values().any(|a| a.username == account.username) {
            return Err(Error::DuplicateUsername(account.username));
        }
        let id = accounts.keys().max().copied().unwrap_or(0) + 1;
        let created = Account {
            id,
            username: account.username,
            password_hash: account.password_hash,
            role: account.role,
        };
        accounts.insert(id, created.clone());
        Ok(created)
    }
}

fn login(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

// ============================================================================
// authenticate Tests
// ============================================================================

#[tokio::test]
async fn test_authenticate_success() {
    let repo = MockAccountRepository::new().with_account(1, "ivan", "Passw0rd", Role::Employee);

    let account = authenticate(&repo, &login("ivan", "Passw0rd")).await.unwrap();

    let account = account.expect("credentials should match");
    assert_eq!(account.id, 1);
    assert_eq!(account.role, Role::Employee);
}

#[tokio::test]
async fn test_authenticate_wrong_password() {
    let repo = MockAccountRepository::new().with_account(1, "ivan", "Passw0rd", Role::Employee);

    let account = authenticate(&repo, &login("ivan", "wrong")).await.unwrap();

    assert!(account.is_none());
}

#[tokio::test]
async fn test_authenticate_unknown_user_same_as_wrong_password() {
    let repo = MockAccountRepository::new().with_account(1, "ivan", "Passw0rd", Role::Employee);

    let unknown = authenticate(&repo, &login("nobody", "Passw0rd")).await.unwrap();
    let wrong = authenticate(&repo, &login("ivan", "nope")).await.unwrap();

    assert!(unknown.is_none());
    assert!(wrong.is_none());
}

#[tokio::test]
async fn test_authenticate_username_is_case_sensitive() {
    let repo = MockAccountRepository::new().with_account(1, "ivan", "Passw0rd", Role::Employee);

    let account = authenticate(&repo, &login("Ivan", "Passw0rd")).await.unwrap();

    assert!(account.is_none());
}

#[tokio::test]
async fn test_authenticate_malformed_stored_hash() {
    let repo = MockAccountRepository::new();
    repo.accounts.lock().unwrap().insert(
        7,
        Account {
            id: 7,
            username: "broken".to_string(),
            password_hash: "not-a-bcrypt-hash".to_string(),
            role: Role::Hr,
        },
    );

    let account = authenticate(&repo, &login("broken", "anything")).await.unwrap();

    assert!(account.is_none());
}

// ============================================================================
// register Tests
// ============================================================================

#[tokio::test]
async fn test_register_hashes_password() {
    let repo = MockAccountRepository::new();

    let account = register(
        &repo,
        RegisterRequest {
            username: "alice".to_string(),
            password: "Secret123".to_string(),
            role: Role::Hr,
        },
    )
    .await
    .unwrap();

    assert_eq!(account.username, "alice");
    assert_eq!(account.role, Role::Hr);
    assert_ne!(account.password_hash, "Secret123");
    assert!(crate::auth::verify_password("Secret123", &account.password_hash));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let repo = MockAccountRepository::new().with_account(1, "alice", "first", Role::Employee);

    let result = register(
        &repo,
        RegisterRequest {
            username: "alice".to_string(),
            password: "second".to_string(),
            role: Role::Employee,
        },
    )
    .await;

    assert!(matches!(result, Err(Error::DuplicateUsername(name)) if name == "alice"));
    assert_eq!(repo.count(), 1);
    // Original credentials still work
    let account = authenticate(&repo, &login("alice", "first")).await.unwrap();
    assert!(account.is_some());
}

#[tokio::test]
async fn test_register_empty_username() {
    let repo = MockAccountRepository::new();

    let result = register(
        &repo,
        RegisterRequest {
            username: String::new(),
            password: "x".to_string(),
            role: Role::Employee,
        },
    )
    .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(repo.count(), 0);
}

// ============================================================================
// ensure_seed_account Tests
// ============================================================================

#[tokio::test]
async fn test_ensure_seed_account_creates_once() {
    let repo = MockAccountRepository::new();
    let seed = SeedAccount::default();

    assert!(ensure_seed_account(&repo, &seed).await.unwrap());
    assert!(!ensure_seed_account(&repo, &seed).await.unwrap());
    assert_eq!(repo.count(), 1);

    let account = authenticate(&repo, &login(&seed.username, &seed.password))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.role, Role::Hr);
}
