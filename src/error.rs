//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! Handlers return [`AppResult`] and every failure is translated into an HTTP
//! status and a `{"detail": ...}` body in exactly one place.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::services::store::StoreError;

/// Central application error type that encompasses all possible error conditions.
///
/// _Db errors are logged automatically, while other errors should be logged at
/// the point of creation if needed._
#[derive(Error, Debug)]
pub enum AppError {
    /// The persistence client was never constructed (degraded mode).
    #[error("database not available")]
    DbUnavailable,

    /// A persistence operation failed after the client was constructed.
    #[error("database error: {0}")]
    Db(#[from] StoreError),

    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Db(e) = &self {
            error!(error = %e, "Database error occurred");
        }

        let (status, detail) = match self {
            AppError::DbUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Database not available".to_string(),
            ),
            AppError::Db(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {e}"),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, format!("Invalid input: {e}")),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
