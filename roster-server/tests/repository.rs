//! Repository-level tests against an in-memory store

use roster_server::db::DbService;
use roster_server::db::models::{EmployeeCreate, EmployeeUpdate};
use roster_server::db::repository::{EmployeeRepository, RepoError};

async fn test_repo() -> EmployeeRepository {
    let service = DbService::connect("mem://").await.expect("in-memory store");
    EmployeeRepository::new(service.db)
}

fn employee(name: &str, email: &str) -> EmployeeCreate {
    EmployeeCreate {
        name: name.to_string(),
        email: email.to_string(),
        department: "Engineering".to_string(),
        position: "Engineer".to_string(),
        salary: 4200.5,
        hire_date: None,
    }
}

#[tokio::test]
async fn create_assigns_unique_ids() {
    let repo = test_repo().await;
    let a = repo.create(employee("A", "a@x.com")).await.unwrap();
    let b = repo.create(employee("B", "b@x.com")).await.unwrap();

    assert!(a.id.starts_with("employee:"));
    assert!(b.id.starts_with("employee:"));
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn create_rejects_duplicate_email() {
    let repo = test_repo().await;
    repo.create(employee("A", "a@x.com")).await.unwrap();

    let err = repo.create(employee("B", "a@x.com")).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn find_by_email_matches_exactly() {
    let repo = test_repo().await;
    repo.create(employee("A", "a@x.com")).await.unwrap();

    assert!(repo.find_by_email("a@x.com").await.unwrap().is_some());
    assert!(repo.find_by_email("a@x.co").await.unwrap().is_none());
}

#[tokio::test]
async fn update_rejects_empty_payload() {
    let repo = test_repo().await;
    let created = repo.create(employee("A", "a@x.com")).await.unwrap();

    let err = repo
        .update(&created.id, EmployeeUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn update_merges_supplied_fields() {
    let repo = test_repo().await;
    let created = repo.create(employee("A", "a@x.com")).await.unwrap();

    let updated = repo
        .update(
            &created.id,
            EmployeeUpdate {
                salary: Some(9000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.salary, 9000.0);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.hire_date, created.hire_date);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let repo = test_repo().await;
    let created = repo.create(employee("A", "a@x.com")).await.unwrap();

    repo.delete(&created.id).await.unwrap();
    assert!(repo.find_by_id(&created.id).await.unwrap().is_none());

    let err = repo.delete(&created.id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}
