//! Runs against a real PostgreSQL database:
//! `DATABASE_URL=postgres://... cargo test -- --ignored`

use std::env;

use chrono::Duration;
use uuid::Uuid;

use department_service::config::Config;
use department_service::db::{self, DepartmentRepository, PgDepartmentRepository};
use department_service::models::department::Department;

async fn repository() -> PgDepartmentRepository {
    let config = Config::from_env().expect("valid config");
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = db::create_pool(&database_url, &config)
        .await
        .expect("Failed to connect to the database");
    PgDepartmentRepository::new(pool)
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn save_find_and_delete() {
    let repo = repository().await;
    let mut department = Department::new("测试部门");
    department.english_name = Some("Test Department".to_string());
    department.email = Some("test@example.com".to_string());

    let saved = repo.save(department.clone()).await.unwrap();
    assert_eq!(saved.id, department.id);
    assert_eq!(saved.name, "测试部门");
    assert_eq!(saved.english_name.as_deref(), Some("Test Department"));

    let found = repo.find_by_id(saved.id).await.unwrap().expect("row exists");
    assert_eq!(found.email.as_deref(), Some("test@example.com"));
    assert!(repo.find_all().await.unwrap().iter().any(|d| d.id == saved.id));

    repo.delete(&found).await.unwrap();
    assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn save_existing_updates_in_place() {
    let repo = repository().await;
    let saved = repo.save(Department::new("Engineering")).await.unwrap();

    let mut changed = saved.clone();
    changed.org_code = Some("ENG01".to_string());
    changed.tenant_id = Uuid::now_v7();
    changed.update_time = saved.update_time + Duration::seconds(1);
    let resaved = repo.save(changed).await.unwrap();

    assert_eq!(resaved.id, saved.id);
    assert_eq!(resaved.org_code.as_deref(), Some("ENG01"));
    assert_eq!(resaved.tenant_id, saved.tenant_id);

    repo.delete_by_id(saved.id).await.unwrap();
    repo.delete_by_id(saved.id).await.unwrap();
}
