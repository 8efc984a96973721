use std::sync::Arc;

use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::db::DepartmentRepository;
use crate::errors::AppError;
use crate::mapper;
use crate::models::department::{Department, DepartmentCreateReq, DepartmentRsp, DepartmentUpdateReq};

pub const DEPARTMENT_NOT_FOUND: &str = "department does not exist";

/// Department use cases. Only ever fails with a 404 or a storage error;
/// request validation happens before these are called.
///
/// Update and delete read the row before writing it. The two steps are not
/// wrapped in a transaction, so a concurrent delete in between surfaces as a
/// storage-level outcome rather than a 404.
#[derive(Clone)]
pub struct DepartmentService {
    repository: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(repository: Arc<dyn DepartmentRepository>) -> Self {
        DepartmentService { repository }
    }

    pub async fn get_all_departments(&self) -> Result<Vec<DepartmentRsp>, AppError> {
        info!("fetching all departments");
        let departments = self.repository.find_all().await?;
        Ok(departments.into_iter().map(mapper::to_rsp).collect())
    }

    pub async fn get_department_by_id(&self, id: Uuid) -> Result<DepartmentRsp, AppError> {
        info!("fetching department {}", id);
        let department = self.find_existing(id).await?;
        Ok(mapper::to_rsp(department))
    }

    pub async fn create_department(&self, req: DepartmentCreateReq) -> Result<DepartmentRsp, AppError> {
        info!("creating department: {}", req.name);
        let department = mapper::to_entity(req);
        let saved = self.repository.save(department).await?;
        Ok(mapper::to_rsp(saved))
    }

    pub async fn update_department(
        &self,
        id: Uuid,
        req: DepartmentUpdateReq,
    ) -> Result<DepartmentRsp, AppError> {
        info!("updating department {}", id);
        let existing = self.find_existing(id).await?;
        let mut department = mapper::update_entity(req, existing);
        department.update_time = Utc::now().max(department.create_time);
        let saved = self.repository.save(department).await?;
        Ok(mapper::to_rsp(saved))
    }

    pub async fn delete_department(&self, id: Uuid) -> Result<(), AppError> {
        info!("deleting department {}", id);
        let department = self.find_existing(id).await?;
        self.repository.delete(&department).await
    }

    async fn find_existing(&self, id: Uuid) -> Result<Department, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(DEPARTMENT_NOT_FOUND))
    }
}
