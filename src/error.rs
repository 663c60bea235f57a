use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;
use utoipa::ToSchema;

use crate::store::EmployeeError;

/// Route-level summary used as `message` when a request fails with a 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum Operation {
    #[strum(serialize = "Error in seeding db")]
    Seed,
    #[strum(serialize = "Error in fetching all Employee")]
    FetchAll,
    #[strum(serialize = "Error in adding new employee")]
    AddNew,
    #[strum(serialize = "Error in updating employee")]
    Update,
    #[strum(serialize = "Error in deleting employee")]
    Delete,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = 404)]
    pub code: u16,
    #[schema(example = "Employee not found")]
    pub message: String,
    #[schema(example = "Employee not found")]
    pub error: String,
}

#[derive(Debug, Display)]
#[display(fmt = "{}: {}", operation, source)]
pub struct ApiError {
    pub operation: Operation,
    pub source: EmployeeError,
}

impl ApiError {
    pub fn new(operation: Operation, source: EmployeeError) -> Self {
        Self { operation, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        if self.source.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if self.source.is_not_found() {
            self.source.to_string()
        } else {
            self.operation.to_string()
        };

        HttpResponse::build(status).json(ErrorBody {
            code: status.as_u16(),
            message,
            error: self.source.to_string(),
        })
    }
}

/// Error handler for JSON bodies and path segments that fail to deserialize.
pub fn payload_error<E>(err: E, _req: &HttpRequest) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    invalid_payload(err)
}

/// 500 `"Invalid request payload"` carrying the parse error text.
pub fn invalid_payload<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::InternalServerError().json(ErrorBody {
        code: 500,
        message: "Invalid request payload".to_string(),
        error: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}
