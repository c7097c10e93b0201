//! Role Model
//!
//! The canonical role enum plus resolution from the loosely-shaped
//! identity payloads the API (and older persisted session records) emit.

use serde::{Deserialize, Serialize};

/// Canonical role identifier. Exactly one role is active per session.
///
/// Roles form no hierarchy: every permission and navigation rule
/// enumerates its allowed roles explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    TaExecutive,
    TaManager,
    HiringManager,
    Interviewer,
    HrOps,
}

impl Role {
    /// All roles, in numeric-id order (see [`Role::from_id`])
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::TaExecutive,
        Role::TaManager,
        Role::HiringManager,
        Role::Interviewer,
        Role::HrOps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::TaExecutive => "ta_executive",
            Role::TaManager => "ta_manager",
            Role::HiringManager => "hiring_manager",
            Role::Interviewer => "interviewer",
            Role::HrOps => "hr_ops",
        }
    }

    /// Map a server-issued numeric role id to a role.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::TaExecutive),
            3 => Some(Role::TaManager),
            4 => Some(Role::HiringManager),
            5 => Some(Role::Interviewer),
            6 => Some(Role::HrOps),
            _ => None,
        }
    }

    /// Match a role name case-sensitively. `"hr_op"` is accepted as a
    /// legacy alias for `hr_ops` (pre-rename API deployments still send it).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "admin" => Some(Role::Admin),
            "ta_executive" => Some(Role::TaExecutive),
            "ta_manager" => Some(Role::TaManager),
            "hiring_manager" => Some(Role::HiringManager),
            "interviewer" => Some(Role::Interviewer),
            "hr_ops" | "hr_op" => Some(Role::HrOps),
            _ => None,
        }
    }

    /// Resolve the canonical role from a raw identity payload.
    ///
    /// Pure and total: never fails. The first role-bearing field present
    /// decides, strictly in this order:
    ///
    /// 1. nested numeric `role.id`
    /// 2. top-level numeric `role_id`
    /// 3. nested string `role.name`
    /// 4. top-level bare string `role`
    ///
    /// An unmappable value (unknown id, unknown name, or no role field at
    /// all) yields [`Role::Admin`]. This fail-open default is inherited
    /// from the source system, which treats an unresolvable role as a
    /// non-fatal bootstrap condition rather than an auth failure.
    pub fn resolve(identity: &RawIdentity) -> Role {
        if let Some(RoleShape::Object { id: Some(id), .. }) = &identity.role {
            return Role::from_id(*id).unwrap_or(Role::Admin);
        }
        if let Some(id) = identity.role_id {
            return Role::from_id(id).unwrap_or(Role::Admin);
        }
        match &identity.role {
            Some(RoleShape::Object { name: Some(name), .. }) => {
                Role::from_name(name).unwrap_or(Role::Admin)
            }
            Some(RoleShape::Name(name)) => Role::from_name(name).unwrap_or(Role::Admin),
            _ => Role::Admin,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `role` field as it actually arrives: a nested object, a bare
/// string, or (from some legacy payloads) something else entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleShape {
    Object {
        #[serde(default)]
        id: Option<i64>,
        #[serde(default)]
        name: Option<String>,
    },
    Name(String),
    /// Catch-all so an unexpected shape never fails deserialization
    Other(serde_json::Value),
}

/// Loosely-typed identity bag from login/bootstrap responses and persisted
/// session records. Parsed into a canonical [`Role`] once, at the system
/// boundary; internal code never re-inspects raw shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
}

impl RawIdentity {
    /// Identity carrying only a nested `role.id`
    pub fn from_role_object_id(id: i64) -> Self {
        Self {
            role: Some(RoleShape::Object {
                id: Some(id),
                name: None,
            }),
            role_id: None,
        }
    }

    /// Identity carrying only a top-level `role_id`
    pub fn from_role_id(id: i64) -> Self {
        Self {
            role: None,
            role_id: Some(id),
        }
    }

    /// Identity carrying only a bare `role` string
    pub fn from_role_name(name: impl Into<String>) -> Self {
        Self {
            role: Some(RoleShape::Name(name.into())),
            role_id: None,
        }
    }
}

/// Role entity as managed by the admin screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Update role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_numeric_ids_map() {
        let expected = [
            (1, Role::Admin),
            (2, Role::TaExecutive),
            (3, Role::TaManager),
            (4, Role::HiringManager),
            (5, Role::Interviewer),
            (6, Role::HrOps),
        ];
        for (id, role) in expected {
            assert_eq!(Role::resolve(&RawIdentity::from_role_object_id(id)), role);
        }
    }

    #[test]
    fn test_unknown_ids_default_to_admin() {
        for id in [0, 7, -1, 42, i64::MAX] {
            assert_eq!(
                Role::resolve(&RawIdentity::from_role_object_id(id)),
                Role::Admin
            );
            assert_eq!(Role::resolve(&RawIdentity::from_role_id(id)), Role::Admin);
        }
    }

    #[test]
    fn test_legacy_hr_op_alias() {
        assert_eq!(Role::from_name("hr_op"), Some(Role::HrOps));
        assert_eq!(Role::from_name("hr_ops"), Some(Role::HrOps));

        let identity: RawIdentity =
            serde_json::from_str(r#"{"role": {"name": "hr_op"}}"#).unwrap();
        assert_eq!(Role::resolve(&identity), Role::HrOps);
    }

    #[test]
    fn test_numeric_id_wins_over_name() {
        let identity: RawIdentity =
            serde_json::from_str(r#"{"role": {"id": 4, "name": "admin"}}"#).unwrap();
        assert_eq!(Role::resolve(&identity), Role::HiringManager);
    }

    #[test]
    fn test_nested_id_wins_over_top_level_role_id() {
        let identity: RawIdentity =
            serde_json::from_str(r#"{"role": {"id": 5}, "role_id": 1}"#).unwrap();
        assert_eq!(Role::resolve(&identity), Role::Interviewer);
    }

    #[test]
    fn test_bare_role_string() {
        let identity: RawIdentity =
            serde_json::from_str(r#"{"role": "ta_manager"}"#).unwrap();
        assert_eq!(Role::resolve(&identity), Role::TaManager);
    }

    #[test]
    fn test_case_sensitive_name_matching() {
        assert_eq!(Role::from_name("Admin"), None);
        assert_eq!(Role::from_name("ADMIN"), None);
        let identity = RawIdentity::from_role_name("Interviewer");
        assert_eq!(Role::resolve(&identity), Role::Admin);
    }

    #[test]
    fn test_empty_identity_defaults_to_admin() {
        assert_eq!(Role::resolve(&RawIdentity::default()), Role::Admin);
    }

    #[test]
    fn test_unexpected_role_shape_is_total() {
        // A numeric `role` field is not a documented shape; it must not
        // fail deserialization, and must resolve to the default.
        let identity: RawIdentity = serde_json::from_str(r#"{"role": 3}"#).unwrap();
        assert_eq!(Role::resolve(&identity), Role::Admin);
    }
}
