//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::etl::EtlError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unrecognized upload file extension (400)
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Parse failure of an accepted format (400)
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Invalid request shape, e.g. missing multipart file (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Unique employee identifier conflict (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<EtlError> for ApiError {
    fn from(err: EtlError) -> Self {
        match err {
            EtlError::UnsupportedFormat(msg) => ApiError::UnsupportedFormat(msg),
            EtlError::MalformedInput(msg) => ApiError::MalformedInput(msg),
        }
    }
}

impl From<payroll_common::Error> for ApiError {
    fn from(err: payroll_common::Error) -> Self {
        match err {
            payroll_common::Error::DuplicateEmployee(id) => {
                ApiError::Conflict(format!("Employee id already exists: {}", id))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::UnsupportedFormat(msg) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT", msg)
            }
            ApiError::MalformedInput(msg) => (StatusCode::BAD_REQUEST, "MALFORMED_INPUT", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
