// ============================
// crates/backend-lib/src/error.rs
// ============================
//! Central error type + Axum integration.
//!
//! Every endpoint answers HTTP 200 with the `{success, payload, message}`
//! envelope; failure lives in the envelope, not the status code. The
//! `IntoResponse` impl below is the single boundary where unexpected faults
//! get logged and converted to that envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use memberarea_common::ApiResponse;
use thiserror::Error;

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "AUTH_001",
            AppError::Validation(_) => "VAL_001",
            AppError::NotFound(_) => "NF_001",
            AppError::Conflict(_) => "CONFLICT_001",
            AppError::Internal(_) => "INT_001",
            AppError::Io(_) => "IO_001",
            AppError::Json(_) => "JSON_001",
        }
    }

    /// Get a message suitable for the client-facing envelope.
    ///
    /// Validation messages are written for the user and pass through;
    /// everything else collapses to a fixed string so internal error text
    /// never leaks.
    pub fn envelope_message(&self) -> String {
        match self {
            AppError::Auth(_) => {
                "Authentication is invalid. Please log in again.".to_string()
            },
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(_) => "The requested resource was not found.".to_string(),
            AppError::Conflict(_) => "The request conflicts with existing data.".to_string(),
            AppError::Internal(_) | AppError::Io(_) | AppError::Json(_) => {
                "Backend processing failed.".to_string()
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(_) | AppError::Io(_) | AppError::Json(_) => {
                tracing::error!(code = self.error_code(), error = %self, "request failed");
            },
            _ => {
                tracing::warn!(code = self.error_code(), error = %self, "request rejected");
            },
        }

        let body = ApiResponse::<()>::fail(self.envelope_message());
        (StatusCode::OK, axum::Json(body)).into_response()
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Internal(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}
