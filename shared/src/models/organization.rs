//! Organization Model

use serde::{Deserialize, Serialize};

/// Organization (hiring company / business unit) entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: Option<String>,
    pub name: String,
    /// Primary email domain, used to suggest organization on user creation
    pub domain: Option<String>,
    pub website: Option<String>,
    pub is_active: bool,
}

/// Create organization payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationCreate {
    pub name: String,
    pub domain: Option<String>,
    pub website: Option<String>,
}

/// Update organization payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationUpdate {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub website: Option<String>,
    pub is_active: Option<bool>,
}
