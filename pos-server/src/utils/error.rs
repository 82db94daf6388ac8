//! Unified error handling
//!
//! Application-level error type and response envelope:
//! - [`AppError`] - HTTP-facing error enum
//! - [`AppResponse`] - JSON error envelope
//!
//! # Error codes
//!
//! | Code | Meaning |
//! |-------|---------|
//! | E0002 | validation failed (400) |
//! | E0003 | resource not found (404) |
//! | E0004 | resource conflict (409) |
//! | E0005 | business rule violation (422) |
//! | E9001 | internal server error (500) |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// JSON error envelope
///
/// ```json
/// { "code": "E0003", "message": "Order not found: abc" }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse {
    pub code: String,
    pub message: String,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown resource id (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Conflicting state, e.g. order already settled (409)
    #[error("Resource conflict: {0}")]
    Conflict(String),

    /// Domain rule violation, e.g. illegal status transition (422)
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Unexpected internal failure (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.as_str()),
            AppError::BusinessRule(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E0005", msg.as_str())
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse {
            code: code.to_string(),
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}
