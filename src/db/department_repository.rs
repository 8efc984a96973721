use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::department::Department;

/// Storage for department records, keyed by `id`.
///
/// Missing rows are not an error at this layer: `find_by_id` returns `None`
/// and the deletes are no-ops. Callers check existence themselves.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Department>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, AppError>;

    /// Inserts the record, or updates the row with the same id. `create_time`
    /// and `tenant_id` of an existing row are kept.
    async fn save(&self, department: Department) -> Result<Department, AppError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError>;

    async fn delete(&self, department: &Department) -> Result<(), AppError> {
        self.delete_by_id(department.id).await
    }
}

pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        PgDepartmentRepository { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        let departments = sqlx::query_as::<_, Department>("SELECT * FROM org_department")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| AppError::DatabaseError(err.to_string()))?;
        Ok(departments)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, AppError> {
        let department = sqlx::query_as::<_, Department>("SELECT * FROM org_department WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| AppError::DatabaseError(err.to_string()))?;
        Ok(department)
    }

    async fn save(&self, department: Department) -> Result<Department, AppError> {
        let saved = sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO org_department (
                id, name, english_name, short_name, org_code, phone, fax, email,
                address, postal_code, create_time, update_time, tenant_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                english_name = EXCLUDED.english_name,
                short_name = EXCLUDED.short_name,
                org_code = EXCLUDED.org_code,
                phone = EXCLUDED.phone,
                fax = EXCLUDED.fax,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                postal_code = EXCLUDED.postal_code,
                update_time = EXCLUDED.update_time
            RETURNING *
            "#,
        )
        .bind(department.id)
        .bind(&department.name)
        .bind(&department.english_name)
        .bind(&department.short_name)
        .bind(&department.org_code)
        .bind(&department.phone)
        .bind(&department.fax)
        .bind(&department.email)
        .bind(&department.address)
        .bind(&department.postal_code)
        .bind(department.create_time)
        .bind(department.update_time)
        .bind(department.tenant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM org_department WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| AppError::DatabaseError(err.to_string()))?;
        Ok(())
    }
}
