use actix_web::{web, HttpResponse};
use log::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::api_response::ApiResponse;
use crate::models::department::{DepartmentCreateReq, DepartmentUpdateReq, DEPARTMENT_FIELDS};
use crate::services::department::DepartmentService;
use crate::utils::validation::validate_payload;

pub const CREATED_MESSAGE: &str = "department created successfully";
pub const UPDATED_MESSAGE: &str = "department updated successfully";

pub async fn get_departments(
    service: web::Data<DepartmentService>,
) -> Result<HttpResponse, AppError> {
    info!("received request to list departments");
    let departments = service.get_all_departments().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(departments)))
}

pub async fn get_department(
    service: web::Data<DepartmentService>,
    department_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let department_id = department_id.into_inner();
    info!("received request to get department {}", department_id);
    let department = service.get_department_by_id(department_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(department)))
}

pub async fn create_department(
    service: web::Data<DepartmentService>,
    new_department: web::Json<DepartmentCreateReq>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_department, &DEPARTMENT_FIELDS)?;
    info!("received request to create department: {}", new_department.name);

    let department = service.create_department(new_department.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success_with_message(CREATED_MESSAGE, department)))
}

pub async fn update_department(
    service: web::Data<DepartmentService>,
    department_id: web::Path<Uuid>,
    updates: web::Json<DepartmentUpdateReq>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*updates, &DEPARTMENT_FIELDS)?;
    let department_id = department_id.into_inner();
    info!("received request to update department {}", department_id);

    let department = service
        .update_department(department_id, updates.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(UPDATED_MESSAGE, department)))
}

pub async fn delete_department(
    service: web::Data<DepartmentService>,
    department_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let department_id = department_id.into_inner();
    info!("received request to delete department {}", department_id);

    service.delete_department(department_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
