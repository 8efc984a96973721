use std::sync::Arc;

use actix_web::http::StatusCode;
use uuid::Uuid;

use department_service::db::{DepartmentRepository, InMemoryDepartmentRepository};
use department_service::errors::AppError;
use department_service::models::department::{DepartmentCreateReq, DepartmentUpdateReq, DEFAULT_TENANT_ID};
use department_service::services::department::{DepartmentService, DEPARTMENT_NOT_FOUND};

fn create_req(name: &str) -> DepartmentCreateReq {
    DepartmentCreateReq {
        name: name.to_string(),
        english_name: Some("Engineering Department".to_string()),
        short_name: None,
        org_code: Some("ENG".to_string()),
        phone: None,
        fax: None,
        email: Some("eng@example.com".to_string()),
        address: None,
        postal_code: None,
    }
}

fn setup() -> (Arc<InMemoryDepartmentRepository>, DepartmentService) {
    let repo = Arc::new(InMemoryDepartmentRepository::new());
    let service = DepartmentService::new(repo.clone());
    (repo, service)
}

fn assert_not_found(result: Result<impl std::fmt::Debug, AppError>) {
    match result {
        Err(AppError::Api { status, message }) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, DEPARTMENT_NOT_FOUND);
        }
        other => panic!("expected not found, got {:?}", other),
    }
}

#[tokio::test]
async fn create_persists_and_returns_defaults() {
    let (repo, service) = setup();

    let created = service.create_department(create_req("Engineering")).await.unwrap();

    assert_eq!(created.id.get_version_num(), 7);
    assert_eq!(created.name, "Engineering");
    assert_eq!(created.org_code.as_deref(), Some("ENG"));
    assert!(created.short_name.is_none());
    assert_eq!(created.tenant_id, DEFAULT_TENANT_ID);
    assert!(created.create_time <= created.update_time);
    assert!(repo.find_by_id(created.id).await.unwrap().is_some());
}

#[tokio::test]
async fn create_never_deduplicates() {
    let (repo, service) = setup();

    let first = service.create_department(create_req("Engineering")).await.unwrap();
    let second = service.create_department(create_req("Engineering")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn get_all_on_empty_storage_is_empty() {
    let (_repo, service) = setup();
    assert!(service.get_all_departments().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_by_id_returns_created_department() {
    let (_repo, service) = setup();
    let created = service.create_department(create_req("Engineering")).await.unwrap();

    let fetched = service.get_department_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_merges_fields_and_refreshes_update_time() {
    let (_repo, service) = setup();
    let created = service.create_department(create_req("Engineering")).await.unwrap();

    let updated = service
        .update_department(
            created.id,
            DepartmentUpdateReq {
                org_code: Some("ENG01".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.org_code.as_deref(), Some("ENG01"));
    assert_eq!(updated.name, "Engineering");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.create_time, created.create_time);
    assert!(updated.update_time >= created.update_time);
    assert!(updated.create_time <= updated.update_time);
}

#[tokio::test]
async fn empty_update_changes_nothing_but_update_time() {
    let (_repo, service) = setup();
    let created = service.create_department(create_req("Engineering")).await.unwrap();

    let mut updated = service
        .update_department(created.id, DepartmentUpdateReq::default())
        .await
        .unwrap();
    updated.update_time = created.update_time;

    assert_eq!(updated, created);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let (repo, service) = setup();
    let created = service.create_department(create_req("Engineering")).await.unwrap();

    service.delete_department(created.id).await.unwrap();

    assert!(repo.is_empty().await);
    assert_not_found(service.get_department_by_id(created.id).await);
}

#[tokio::test]
async fn unknown_ids_are_not_found_and_leave_storage_untouched() {
    let (repo, service) = setup();
    let existing = service.create_department(create_req("Engineering")).await.unwrap();
    let missing = Uuid::now_v7();

    assert_not_found(service.get_department_by_id(missing).await);
    assert_not_found(
        service
            .update_department(
                missing,
                DepartmentUpdateReq {
                    name: Some("Platform".to_string()),
                    ..Default::default()
                },
            )
            .await,
    );
    assert_not_found(service.delete_department(missing).await);

    let all = service.get_all_departments().await.unwrap();
    assert_eq!(all, vec![existing]);
    assert_eq!(repo.len().await, 1);
}
