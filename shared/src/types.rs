//! Common types for the shared crate
//!
//! Utility types used across the workspace

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Action scoped to a resource, the unit of permission checks.
///
/// The set is closed: the permission sync payload only ever carries these
/// four verbs after the `.` separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Create,
    Write,
    Delete,
}

impl Action {
    /// All actions, in the order the sync payload enumerates them
    pub const ALL: [Action; 4] = [Action::Read, Action::Create, Action::Write, Action::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Write => "write",
            Action::Delete => "delete",
        }
    }

    /// Parse the action segment of a `"resource.action"` key
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "read" => Some(Action::Read),
            "create" => Some(Action::Create),
            "write" => Some(Action::Write),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
