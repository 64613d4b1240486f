use crate::schemas::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::FieldError;
use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the API handlers.
///
/// Everything a handler can fail with funnels through here so the HTTP
/// mapping lives in one place instead of being repeated per handler.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("{message}")]
    BadRequest {
        code: &'static str,
        message: String,
    },
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                Some(errors.clone()),
            ),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", None),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN", None),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", None),
            AppError::BadRequest { code, .. } => (StatusCode::BAD_REQUEST, *code, None),
            AppError::Database(db_error) => {
                tracing::error!("Database error: {}", db_error);
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", None)
            }
        };

        let message = match &self {
            // The Display impl for Validation carries no field detail;
            // spell the failing fields out in the message as well.
            AppError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                format!("validation failed for: {}", fields.join(", "))
            }
            AppError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            success: false,
            details,
        };

        (status, Json(body)).into_response()
    }
}
