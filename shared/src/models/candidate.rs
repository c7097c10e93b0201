//! Candidate Model

use serde::{Deserialize, Serialize};

/// Candidate entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Skill references (String IDs)
    pub skills: Vec<String>,
    pub current_title: Option<String>,
    pub experience_years: Option<i32>,
    /// Server-side storage key of the uploaded resume, if any
    pub resume_key: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Create candidate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub current_title: Option<String>,
    pub experience_years: Option<i32>,
}

/// Update candidate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub current_title: Option<String>,
    pub experience_years: Option<i32>,
    pub is_active: Option<bool>,
}
