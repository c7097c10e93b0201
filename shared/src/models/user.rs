//! User Model
//!
//! Users as managed by the admin screens. The `role_id` here is the
//! numeric id the role admin screens work with; the session-side role is
//! resolved separately (see `role.rs`).

use serde::{Deserialize, Serialize};

/// User response (without credentials)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    /// Role reference (numeric ID)
    pub role_id: i64,
    /// Organization reference (String ID)
    pub organization: Option<String>,
    pub is_active: bool,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: i64,
    pub organization: Option<String>,
}

/// Update user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_id: Option<i64>,
    pub organization: Option<String>,
    pub is_active: Option<bool>,
}
