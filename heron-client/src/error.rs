//! Client error types

use shared::error::AppError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (401 from the API, surfaced unhandled)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => AppError::network(e.to_string()),
            ClientError::InvalidResponse(msg) => {
                AppError::with_message(shared::error::ErrorCode::InvalidFormat, msg)
            }
            ClientError::Unauthorized => AppError::not_authenticated(),
            ClientError::Forbidden(msg) => AppError::permission_denied(msg),
            ClientError::NotFound(msg) => {
                AppError::with_message(shared::error::ErrorCode::NotFound, msg)
            }
            ClientError::Validation(msg) => AppError::validation(msg),
            ClientError::Internal(msg) => AppError::internal(msg),
            ClientError::Serialization(e) => {
                AppError::with_message(shared::error::ErrorCode::InvalidFormat, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_client_error_maps_to_app_error() {
        let err: AppError = ClientError::Unauthorized.into();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);

        let err: AppError = ClientError::Forbidden("job.delete".into()).into();
        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert_eq!(err.message, "job.delete");

        let err: AppError = ClientError::NotFound("Candidate c42".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
