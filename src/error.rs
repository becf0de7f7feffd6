//! HTTP-facing error type and conversions from domain errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::errors::{AssignError, StoreError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        // Store details (paths, OS errors) stay in the logs.
        tracing::error!(error = %e, "Mapping store failure");
        AppError::internal("Mapping store error", json!({ "kind": e.kind() }))
    }
}

impl From<AssignError> for AppError {
    fn from(e: AssignError) -> Self {
        match e {
            AssignError::EmptyTarget => {
                AppError::bad_request("URL must not be empty", json!({ "field": "url" }))
            }
            AssignError::CodeAlreadyTaken(code) => {
                AppError::conflict("Custom code already exists", json!({ "code": code }))
            }
            AssignError::CodeSpaceExhausted(attempts) => AppError::internal(
                "Failed to generate unique code",
                json!({ "reason": "Too many collisions", "attempts": attempts }),
            ),
            AssignError::Store(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("x", json!({})).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::internal("x", json!({})).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_code_already_taken_is_conflict() {
        let err: AppError = AssignError::CodeAlreadyTaken("abc123".to_string()).into();

        match err {
            AppError::Conflict { details, .. } => assert_eq!(details["code"], "abc123"),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_store_errors_are_internal_without_paths() {
        let err: AppError =
            AssignError::Store(StoreError::Corrupt("/srv/urls.json: EOF".to_string())).into();

        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.details["kind"], "corrupt");
        assert!(!info.details.to_string().contains("/srv"));
    }

    #[test]
    fn test_exhaustion_is_internal() {
        let err: AppError = AssignError::CodeSpaceExhausted(64).into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
