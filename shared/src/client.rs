//! Client-related types shared between the API client and the console
//!
//! Request/response DTOs for the auth and permission-sync endpoints.

use serde::{Deserialize, Serialize};

use crate::models::role::RawIdentity;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Role-bypass login request (development convenience path)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BypassLoginRequest {
    pub role: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information as the API sends it.
///
/// The role fields are deliberately loose (`RawIdentity` flattened in):
/// different deployments send a nested role object, a numeric `role_id`,
/// or a bare string. Resolution happens once, at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub identity: RawIdentity,
}

/// Current user response (`GET /api/auth/me`)
pub type CurrentUserResponse = UserInfo;

// =============================================================================
// Permission Sync DTOs
// =============================================================================

/// Permission sync request: the client's declared permission set,
/// as dotted `"resource.action"` keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRequest {
    pub permissions: Vec<String>,
}

/// Result body of `POST /api/permissions/sync`.
///
/// Four disjoint lists of dotted `"resource.action"` keys describing how
/// the server reconciled the declared set against stored grants, plus any
/// keys it rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncResult {
    #[serde(default)]
    pub created: Vec<String>,
    #[serde(default)]
    pub existing: Vec<String>,
    #[serde(default)]
    pub updated: Vec<String>,
    #[serde(default)]
    pub deleted: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A sync result paired with the server timestamp it was issued at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub result: SyncResult,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::Role;

    #[test]
    fn test_user_info_role_shapes_deserialize() {
        let nested: UserInfo = serde_json::from_str(
            r#"{"id":"u1","name":"Dana","email":"d@x.io","role":{"id":3,"name":"ta_manager"}}"#,
        )
        .unwrap();
        assert_eq!(Role::resolve(&nested.identity), Role::TaManager);

        let flat: UserInfo = serde_json::from_str(
            r#"{"id":"u2","name":"Eli","email":"e@x.io","role_id":5}"#,
        )
        .unwrap();
        assert_eq!(Role::resolve(&flat.identity), Role::Interviewer);

        let bare: UserInfo = serde_json::from_str(
            r#"{"id":"u3","name":"Noa","email":"n@x.io","role":"hr_ops"}"#,
        )
        .unwrap();
        assert_eq!(Role::resolve(&bare.identity), Role::HrOps);
    }

    #[test]
    fn test_sync_result_missing_lists_default_empty() {
        let result: SyncResult =
            serde_json::from_str(r#"{"created":["job.create"]}"#).unwrap();
        assert_eq!(result.created, vec!["job.create"]);
        assert!(result.deleted.is_empty());
        assert!(result.errors.is_empty());
    }
}
