//! Shared types for the Heron recruiting console
//!
//! Common types used across the client and console crates: domain models,
//! the canonical role enum and identity resolution, error types, API
//! response envelopes, and request/query types.

pub mod client;
pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Role re-exports (resolved at every system boundary)
pub use models::role::{RawIdentity, Role};
