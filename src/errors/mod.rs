use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

pub const MALFORMED_BODY_MESSAGE: &str = "malformed request body";
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "resource not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("{0}")]
    Validation(String),
    #[error("{}", MALFORMED_BODY_MESSAGE)]
    MalformedBody,
    #[error("parameter '{parameter}' type mismatch, expected type: {expected}")]
    TypeMismatch {
        parameter: &'static str,
        expected: &'static str,
    },
    #[error("Database Error: {0}")]
    DatabaseError(String),
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::Api {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        AppError::Api {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        }
    }

    /// Message sent to the client. Internal failures never leak their detail.
    pub fn client_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Api { status, .. } => *status,
            AppError::Validation(_) | AppError::MalformedBody | AppError::TypeMismatch { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::DatabaseError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        error!("request failed with {}: {}", status.as_u16(), self);
        HttpResponse::build(status).json(ApiResponse::<()>::error(status.as_u16(), self.client_message()))
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    error!("unreadable request body: {}", err);
    AppError::MalformedBody.into()
}

/// Fallback for paths no route matches.
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::Api {
        status: StatusCode::NOT_FOUND,
        message: format!("{}: {}", ROUTE_NOT_FOUND_MESSAGE, req.path()),
    })
}

/// Fallback for a matched path requested with an unsupported method.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    error!("{} not supported on {}", req.method(), req.path());
    Err(AppError::method_not_allowed())
}

// Every routed path parameter is the department id.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    error!("path parameter rejected: {}", err);
    AppError::TypeMismatch {
        parameter: "id",
        expected: "UUID",
    }
    .into()
}
