//! Error types

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// The primary error type the console surfaces to its embedding host,
/// providing standardized codes via [`ErrorCode`], human-readable
/// messages, and optional structured details for debugging.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a not authenticated error
    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create a token expired error
    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }

    /// Create a sync failed error
    pub fn sync_failed(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::SyncFailed, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NetworkError, msg)
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "email")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "email");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::not_authenticated().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::permission_denied("interviewers cannot delete jobs").http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::not_found("Candidate").http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::NotFound, "Job not found");
        assert_eq!(format!("{}", err), "Job not found");
    }

    #[test]
    fn test_app_error_serializes_code_as_number() {
        let err = AppError::new(ErrorCode::PermissionDenied);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":2001"));
    }
}
