//! Unified error system for the Heron workspace
//!
//! This module provides the error handling surface shared by the client
//! and console crates:
//! - [`ErrorCode`]: standardized, numbered error codes
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: rich error type with code, message, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Permission-sync errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! // Create an error with custom message and details
//! let err = AppError::validation("Missing required field")
//!     .with_detail("field", "email");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
