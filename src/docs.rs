use crate::api::employee::{
    CreateEmployeeRequest, CreateEmployeeResponse, DeleteEmployeeRequest, EmployeeListResponse,
    MessageResponse, SeedResponse, UpdateEmployeeResponse,
};
use crate::error::ErrorBody;
use crate::model::employee::{Employee, EmployeePatch, EmployeeSummary, NewEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee CRUD API",
        version = "1.0.0",
        description = r#"
## Employee records

Create, list, update and delete employees stored in a single MySQL table.

### Response Format
- JSON in, JSON out
- Every failure is `{ "code", "message", "error" }`; `404` when the employee (or any
  employee) does not exist, `500` for everything else

### Seeding
`GET /seed_db` drops the table and inserts ten sample employees. It can be switched off
with `SEED_ENABLED=false`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::index,
        crate::api::employee::seed_db,
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee
    ),
    components(
        schemas(
            Employee,
            EmployeeSummary,
            NewEmployee,
            EmployeePatch,
            EmployeeListResponse,
            CreateEmployeeRequest,
            CreateEmployeeResponse,
            UpdateEmployeeResponse,
            DeleteEmployeeRequest,
            MessageResponse,
            SeedResponse,
            ErrorBody
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
    )
)]
pub struct ApiDoc;
