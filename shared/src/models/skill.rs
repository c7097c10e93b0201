//! Skill Models
//!
//! Skills are grouped under major skills (e.g. "tokio" under "backend").

use serde::{Deserialize, Serialize};

/// Skill entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: Option<String>,
    pub name: String,
    /// Major skill reference (String ID)
    pub major_skill: Option<String>,
    pub is_active: bool,
}

/// Create skill payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCreate {
    pub name: String,
    pub major_skill: Option<String>,
}

/// Update skill payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillUpdate {
    pub name: Option<String>,
    pub major_skill: Option<String>,
    pub is_active: Option<bool>,
}

/// Major skill (skill group) entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorSkill {
    pub id: Option<String>,
    pub name: String,
    pub is_active: bool,
}

/// Create major skill payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorSkillCreate {
    pub name: String,
}

/// Update major skill payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorSkillUpdate {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}
