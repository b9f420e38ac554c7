//! Integration tests for the SQLite repositories and the employee service

use chrono::NaiveDate;
use hrdesk_core::db::Database;
use hrdesk_core::models::{EmployeePatch, NewEmployee, Role};
use hrdesk_core::services::auth::{
    authenticate, ensure_seed_account, register, LoginRequest, RegisterRequest,
    SqliteAccountRepository,
};
use hrdesk_core::services::employees::{
    CreateEmployeeRequest, EmployeeService, SqliteEmployeeRepository,
};
use hrdesk_core::services::NoopNotifier;
use hrdesk_core::SeedAccount;
use tempfile::TempDir;

/// Helper to create a test database
async fn create_test_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db = Database::open(db_path).await.expect("Failed to create test database");
    (db, temp_dir)
}

fn service(db: &Database) -> EmployeeService<SqliteEmployeeRepository<'_>> {
    EmployeeService::new(SqliteEmployeeRepository::new(&db.pool), Box::new(NoopNotifier))
}

fn request(username: &str, first: &str, last: &str) -> CreateEmployeeRequest {
    CreateEmployeeRequest {
        username: username.to_string(),
        password: "Passw0rd".to_string(),
        profile: NewEmployee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            position: "Engineer".to_string(),
            passport: "1234 567890".to_string(),
            birth_year: Some(1990),
            experience_years: Some(5),
            hire_date: NaiveDate::from_ymd_opt(2020, 3, 1),
            phone_mobile: Some("+79001234567".to_string()),
            phone_work: None,
            vacation_days_left: Some(28),
        },
    }
}

async fn count(db: &Database, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let row: (i64,) = sqlx::query_as(&sql).fetch_one(&db.pool).await.unwrap();
    row.0
}

#[tokio::test]
async fn test_create_login_and_delete_flow() {
    let (db, _temp_dir) = create_test_db().await;
    let accounts = SqliteAccountRepository::new(&db.pool);
    let service = service(&db);

    let created = service.create(request("ivan", "Ivan", "Petrov")).await.unwrap();
    assert_eq!(created.username, "ivan");
    assert_eq!(created.hire_date, NaiveDate::from_ymd_opt(2020, 3, 1));

    let login = LoginRequest {
        username: "ivan".to_string(),
        password: "Passw0rd".to_string(),
    };
    let account = authenticate(&accounts, &login).await.unwrap().unwrap();
    assert_eq!(account.role, Role::Employee);
    assert_eq!(account.id, created.user_id);

    let wrong = LoginRequest {
        username: "ivan".to_string(),
        password: "wrong".to_string(),
    };
    assert!(authenticate(&accounts, &wrong).await.unwrap().is_none());

    let own = service.get_by_account(account.id).await.unwrap().unwrap();
    assert_eq!(own, created);

    service.delete(created.id).await.unwrap();

    assert!(authenticate(&accounts, &login).await.unwrap().is_none());
    assert_eq!(count(&db, "users").await, 0);
    assert_eq!(count(&db, "employees").await, 0);
}

#[tokio::test]
async fn test_duplicate_username_leaves_first_pair_intact() {
    let (db, _temp_dir) = create_test_db().await;
    let service = service(&db);

    let first = service.create(request("alice", "Alice", "Smith")).await.unwrap();
    let err = service.create(request("alice", "Other", "Person")).await.unwrap_err();

    assert!(err.is_duplicate_username());
    assert_eq!(count(&db, "users").await, 1);
    assert_eq!(count(&db, "employees").await, 1);
    assert_eq!(service.get(first.id).await.unwrap().unwrap().first_name, "Alice");
}

#[tokio::test]
async fn test_failed_record_insert_rolls_back_account() {
    let (db, _temp_dir) = create_test_db().await;
    let repo = SqliteEmployeeRepository::new(&db.pool);

    // Force the employees insert to fail after the account row is written
    sqlx::query(
        "CREATE TRIGGER reject_employee BEFORE INSERT ON employees \
         BEGIN SELECT RAISE(ABORT, 'rejected'); END",
    )
    .execute(&db.pool)
    .await
    .unwrap();

    let service = EmployeeService::new(repo, Box::new(NoopNotifier));
    assert!(service.create(request("bob", "Bob", "Stone")).await.is_err());

    assert_eq!(count(&db, "users").await, 0);
    assert_eq!(count(&db, "employees").await, 0);
}

#[tokio::test]
async fn test_search_orders_by_id_and_applies_policy() {
    let (db, _temp_dir) = create_test_db().await;
    let service = service(&db);

    service.create(request("anna", "Anna", "Kim")).await.unwrap();
    service.create(request("sveta", "Svetlana", "Orlova")).await.unwrap();
    service.create(request("petr", "Petr", "Ivanov")).await.unwrap();
    service.create(request("oleg7", "Oleg", "Sidorov")).await.unwrap();
    service.create(request("masha", "Мария", "Иванова")).await.unwrap();

    let ids = |list: Vec<hrdesk_core::Employee>| list.iter().map(|e| e.id).collect::<Vec<_>>();

    assert_eq!(ids(service.search("").await.unwrap()), vec![1, 2, 3, 4, 5]);
    assert_eq!(ids(service.search("an").await.unwrap()), vec![1, 2, 3]);
    assert_eq!(ids(service.search("ANNA").await.unwrap()), vec![1]);
    assert_eq!(ids(service.search("иван").await.unwrap()), vec![5]);
    assert_eq!(ids(service.search("3").await.unwrap()), vec![3]);

    // Digit strings never do substring matching
    assert!(service.search("7").await.unwrap().is_empty());
    assert!(service.search("99999999999999999999").await.unwrap().is_empty());
    assert!(service.search("%").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_partial_update_persists_only_given_fields() {
    let (db, _temp_dir) = create_test_db().await;
    let service = service(&db);
    let created = service.create(request("ivan", "Ivan", "Petrov")).await.unwrap();

    let patch = EmployeePatch {
        position: Some("Team lead".to_string()),
        vacation_days_left: Some(3),
        ..Default::default()
    };
    service.update(created.id, patch).await.unwrap();

    let stored = service.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored.position, "Team lead");
    assert_eq!(stored.vacation_days_left, Some(3));
    assert_eq!(stored.first_name, "Ivan");
    assert_eq!(stored.passport, "1234 567890");
    assert_eq!(stored.hire_date, created.hire_date);

    let err = service
        .update(999, EmployeePatch::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_blank_phone_stored_as_null_on_create_and_update() {
    let (db, _temp_dir) = create_test_db().await;
    let service = service(&db);

    let mut req = request("ivan", "Ivan", "Petrov");
    req.profile.phone_work = Some("  ".to_string());
    let created = service.create(req).await.unwrap();
    assert_eq!(created.phone_work, None);
    assert_eq!(created.phone_mobile.as_deref(), Some("+79001234567"));

    let patch = EmployeePatch {
        phone_mobile: Some(String::new()),
        ..Default::default()
    };
    let updated = service.update(created.id, patch).await.unwrap();
    assert_eq!(updated.phone_mobile, None);

    let (nulls,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM employees WHERE phone_mobile IS NULL AND phone_work IS NULL",
    )
    .fetch_one(&db.pool)
    .await
    .unwrap();
    assert_eq!(nulls, 1);
}

#[tokio::test]
async fn test_delete_twice_and_ids_not_reused() {
    let (db, _temp_dir) = create_test_db().await;
    let service = service(&db);

    for i in 1..=5 {
        let name = format!("user{}", i);
        service.create(request(&name, "Name", "Surname")).await.unwrap();
    }

    service.delete(5).await.unwrap();
    assert!(service.delete(5).await.unwrap_err().is_not_found());
    assert_eq!(count(&db, "employees").await, 4);

    let next = service.create(request("user6", "Name", "Surname")).await.unwrap();
    assert_eq!(next.id, 6);
}

#[tokio::test]
async fn test_seed_account_created_once() {
    let (db, _temp_dir) = create_test_db().await;
    let accounts = SqliteAccountRepository::new(&db.pool);
    let seed = SeedAccount::default();

    assert!(ensure_seed_account(&accounts, &seed).await.unwrap());
    assert!(!ensure_seed_account(&accounts, &seed).await.unwrap());

    let login = LoginRequest {
        username: "da".to_string(),
        password: "da".to_string(),
    };
    let account = authenticate(&accounts, &login).await.unwrap().unwrap();
    assert_eq!(account.role, Role::Hr);
}

#[tokio::test]
async fn test_register_duplicate_and_case_sensitive_login() {
    let (db, _temp_dir) = create_test_db().await;
    let accounts = SqliteAccountRepository::new(&db.pool);

    let request = RegisterRequest {
        username: "Boss".to_string(),
        password: "Secret12".to_string(),
        role: Role::Hr,
    };
    register(&accounts, request.clone()).await.unwrap();
    assert!(register(&accounts, request).await.unwrap_err().is_duplicate_username());

    let wrong_case = LoginRequest {
        username: "boss".to_string(),
        password: "Secret12".to_string(),
    };
    assert!(authenticate(&accounts, &wrong_case).await.unwrap().is_none());
}
