use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::{
    error::{ApiError, Operation, invalid_payload},
    model::employee::{Employee, EmployeePatch, EmployeeSummary, NewEmployee},
    store::EmployeeStore,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Employee record deleted successfully")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    #[schema(example = "Database Seeding successful")]
    pub message: String,
    #[schema(example = 10)]
    pub records_inserted: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub new_employee: NewEmployee,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeResponse {
    pub new_employee: Employee,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeResponse {
    #[schema(example = "Employee updated successfully")]
    pub message: String,
    pub updated_employee: Employee,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteEmployeeRequest {
    #[schema(example = 11)]
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: u64,
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    ),
    tag = "Employee"
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "BD5.3 - HW2".to_string(),
    })
}

/// Reset and seed the database
///
/// Drops the employees table, recreates it and inserts ten sample employees.
/// Every existing row is lost.
#[utoipa::path(
    get,
    path = "/seed_db",
    responses(
        (status = 200, description = "Database seeded", body = SeedResponse),
        (status = 500, description = "Seeding failed", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn seed_db(store: web::Data<dyn EmployeeStore>) -> Result<HttpResponse, ApiError> {
    let inserted = store.seed().await.map_err(|e| {
        error!(error = %e, "Error in seeding db");
        ApiError::new(Operation::Seed, e)
    })?;

    Ok(HttpResponse::Ok().json(SeedResponse {
        message: "Database Seeding successful".to_string(),
        records_inserted: inserted,
    }))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees, without timestamps", body = EmployeeListResponse),
        (status = 404, description = "No employee found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, ApiError> {
    let employees = store.fetch_all().await.map_err(|e| {
        error!(error = %e, "Error in fetching all employees");
        ApiError::new(Operation::FetchAll, e)
    })?;

    info!(count = employees.len(), "Successfully fetched employees");

    Ok(HttpResponse::Ok().json(EmployeeListResponse { employees }))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employee/new",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "Employee created", body = CreateEmployeeResponse),
        (status = 404, description = "Failed to add new employee", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, ApiError> {
    let CreateEmployeeRequest { new_employee } = payload.into_inner();

    let created = store.add_new(new_employee).await.map_err(|e| {
        error!(error = %e, "Error adding new employee");
        ApiError::new(Operation::AddNew, e)
    })?;

    info!(employee_id = created.id, "Employee created");

    Ok(HttpResponse::Ok().json(CreateEmployeeResponse {
        new_employee: created,
    }))
}

/// Update Employee
///
/// Only the fields present in the body are changed.
#[utoipa::path(
    post,
    path = "/employees/update/{id}",
    params(
        ("id" = u64, Path, description = "Employee ID")
    ),
    request_body = EmployeePatch,
    responses(
        (status = 200, description = "Employee updated", body = UpdateEmployeeResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<u64>,
    body: web::Bytes,
) -> actix_web::Result<HttpResponse> {
    let employee_id = path.into_inner();
    let patch = parse_patch(&body).map_err(invalid_payload)?;

    let updated = store
        .update_by_id(employee_id, patch)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Error in updating employee");
            ApiError::new(Operation::Update, e)
        })?;

    Ok(HttpResponse::Ok().json(UpdateEmployeeResponse {
        message: "Employee updated successfully".to_string(),
        updated_employee: updated,
    }))
}

/// A missing or blank body is an empty patch, so the id lookup alone decides
/// between 404 and 200. The content type is not checked.
fn parse_patch(body: &[u8]) -> Result<EmployeePatch, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(EmployeePatch::default());
    }
    serde_json::from_slice(body)
}

/// Delete Employee
#[utoipa::path(
    post,
    path = "/employees/delete",
    request_body = DeleteEmployeeRequest,
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    body: web::Json<DeleteEmployeeRequest>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = body.id;

    store.delete_by_id(employee_id).await.map_err(|e| {
        error!(error = %e, employee_id, "Error in deleting employee");
        ApiError::new(Operation::Delete, e)
    })?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Employee record deleted successfully".to_string(),
    }))
}
