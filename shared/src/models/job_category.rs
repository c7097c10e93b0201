//! Job Category Model

use serde::{Deserialize, Serialize};

/// Job category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCategory {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

/// Create job category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCategoryCreate {
    pub name: String,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

/// Update job category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
