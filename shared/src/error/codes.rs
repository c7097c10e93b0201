//! Unified error codes for the Heron workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Permission-sync errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility (Rust, TypeScript).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Sync ====================
    /// Permission sync request failed
    SyncFailed = 3001,
    /// Server rejected part of the declared permission set
    SyncRejectedKeys = 3002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error reaching the API
    NetworkError = 9002,
    /// Local storage error (session record)
    StorageError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid credentials",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::SessionExpired => "Session expired",
            Self::PermissionDenied => "Permission denied",
            Self::RoleRequired => "Role required",
            Self::AdminRequired => "Admin access required",
            Self::SyncFailed => "Permission sync failed",
            Self::SyncRejectedKeys => "Permission sync rejected keys",
            Self::InternalError => "Internal error",
            Self::NetworkError => "Network error",
            Self::StorageError => "Storage error",
        }
    }

    /// Get the HTTP status code this error maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ValidationFailed | Self::InvalidRequest | Self::InvalidFormat => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::SessionExpired => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied | Self::RoleRequired | Self::AdminRequired => {
                StatusCode::FORBIDDEN
            }
            Self::SyncFailed => StatusCode::BAD_GATEWAY,
            Self::SyncRejectedKeys => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unknown | Self::InternalError | Self::NetworkError | Self::StorageError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}
impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),

            // Sync
            3001 => Ok(ErrorCode::SyncFailed),
            3002 => Ok(ErrorCode::SyncRejectedKeys),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::StorageError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
