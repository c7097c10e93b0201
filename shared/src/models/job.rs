//! Job Model

use serde::{Deserialize, Serialize};

/// Job entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    /// Organization reference (String ID)
    pub organization: String,
    /// Job category reference (String ID)
    pub category: Option<String>,
    /// Skill references (String IDs)
    pub skills: Vec<String>,
    pub location: Option<String>,
    /// Number of open positions
    pub openings: i32,
    pub min_experience_years: Option<i32>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create job payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreate {
    pub title: String,
    pub description: String,
    pub organization: String,
    pub category: Option<String>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub openings: Option<i32>,
    pub min_experience_years: Option<i32>,
}

/// Update job payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub organization: Option<String>,
    pub category: Option<String>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub openings: Option<i32>,
    pub min_experience_years: Option<i32>,
    pub is_active: Option<bool>,
}
