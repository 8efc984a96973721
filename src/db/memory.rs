use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::DepartmentRepository;
use crate::errors::AppError;
use crate::models::department::Department;

/// Process-local repository with the same semantics as the Postgres one.
/// Records are listed in id order, which for v7 ids is creation order.
#[derive(Default)]
pub struct InMemoryDepartmentRepository {
    rows: RwLock<BTreeMap<Uuid, Department>>,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, AppError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, AppError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn save(&self, mut department: Department) -> Result<Department, AppError> {
        let mut rows = self.rows.write().await;
        if let Some(existing) = rows.get(&department.id) {
            department.create_time = existing.create_time;
            department.tenant_id = existing.tenant_id;
        }
        rows.insert(department.id, department.clone());
        Ok(department)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }
}
