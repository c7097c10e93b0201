//! Heron Client - HTTP client for the recruiting API
//!
//! Provides typed, authenticated access to the remote recruiting API:
//! auth endpoints, CRUD resource clients, and permission sync.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod permissions;
pub mod resources;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use resources::ResourceClient;

// Re-export shared types for convenience
pub use shared::client::{CurrentUserResponse, LoginResponse, SyncOutcome, SyncResult, UserInfo};
