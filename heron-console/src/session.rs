//! Session state and its single owner
//!
//! [`Session`] is the in-memory value the rest of the console consumes:
//! canonical role, display identity, bearer token, and the current
//! permission index snapshot. [`SessionStore`] is the only component
//! that touches the persisted session record; nothing else reads or
//! writes it ad hoc.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::client::LoginResponse;
use shared::models::role::{RawIdentity, Role};
use shared::types::Timestamp;
use shared::util::now_millis;

use crate::authz::PermissionIndex;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Authenticated session state.
///
/// The permission index is `None` until the first sync completes; all
/// gating queries fail closed in that window.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub email: String,
    /// Canonical role, resolved once at login/restore
    pub role: Role,
    pub token: String,
    /// Token expiry (Unix seconds), when the JWT carries one
    pub expires_at: Option<u64>,
    pub logged_in_at: Timestamp,
    pub permissions: Option<PermissionIndex>,
}

impl Session {
    /// Build a session from a successful login response.
    pub fn from_login(login: &LoginResponse) -> Self {
        let LoginResponse { token, user } = login;
        Self {
            user_id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: Role::resolve(&user.identity),
            token: token.clone(),
            expires_at: parse_jwt_exp(token),
            logged_in_at: now_millis(),
            permissions: None,
        }
    }

    /// Replace the permission snapshot (built off to the side by the
    /// caller; this is the swap).
    pub fn set_permissions(&mut self, index: PermissionIndex) {
        self.permissions = Some(index);
    }
}

/// Persisted session record, fixed field keys.
///
/// The role is stored in its raw shape: older records carry `role_id` or
/// a bare `role` string, newer ones the nested object. Resolution happens
/// on load, like any other system boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub identity: RawIdentity,
    pub authenticated: bool,
    pub token: String,
    pub expires_at: Option<u64>,
    pub logged_in_at: Timestamp,
}

impl SessionRecord {
    pub fn from_session(session: &Session) -> Self {
        Self {
            user_id: session.user_id.clone(),
            name: session.name.clone(),
            email: session.email.clone(),
            identity: RawIdentity::from_role_name(session.role.as_str()),
            authenticated: true,
            token: session.token.clone(),
            expires_at: session.expires_at,
            logged_in_at: session.logged_in_at,
        }
    }

    /// Rebuild the in-memory session. The permission index is never
    /// persisted; it is rebuilt by the next sync.
    pub fn into_session(self) -> Session {
        Session {
            role: Role::resolve(&self.identity),
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            token: self.token,
            expires_at: self.expires_at,
            logged_in_at: self.logged_in_at,
            permissions: None,
        }
    }
}

/// Extract the `exp` claim (Unix seconds) from a JWT without verifying it.
///
/// The client never validates tokens, that is the server's job; the expiry
/// is only used to discard stale persisted records.
pub fn parse_jwt_exp(token: &str) -> Option<u64> {
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_u64()
}

/// Owner of the persisted session record
pub struct SessionStore {
    /// Record path: `{data_dir}/auth/session.json`
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join("auth/session.json"),
        }
    }

    /// Load the persisted record, if a usable one exists.
    ///
    /// A missing file, a corrupt record, or an expired token all yield
    /// `Ok(None)`: the user simply logs in again.
    pub fn load(&self) -> Result<Option<SessionRecord>, SessionStoreError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        let record: SessionRecord = match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding corrupt session record");
                let _ = std::fs::remove_file(&self.file_path);
                return Ok(None);
            }
        };

        if !record.authenticated {
            return Ok(None);
        }

        let now = (now_millis() / 1000) as u64;
        if let Some(expires_at) = record.expires_at
            && now > expires_at
        {
            let _ = std::fs::remove_file(&self.file_path);
            tracing::info!(user = %record.user_id, "Persisted session expired, cleared");
            return Ok(None);
        }

        tracing::info!(user = %record.user_id, "Loaded persisted session");
        Ok(Some(record))
    }

    /// Persist the record (written after login and after sync).
    pub fn save(&self, record: &SessionRecord) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(user = %record.user_id, "Session record saved");
        Ok(())
    }

    /// Clear the persisted record (logout).
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Session record cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    use tempfile::TempDir;

    fn jwt_with_exp(exp: u64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{}}}"#, exp));
        format!("{}.{}.sig", header, payload)
    }

    fn record(token: &str, expires_at: Option<u64>) -> SessionRecord {
        SessionRecord {
            user_id: "u1".into(),
            name: "Dana".into(),
            email: "dana@example.com".into(),
            identity: RawIdentity::from_role_name("ta_manager"),
            authenticated: true,
            token: token.into(),
            expires_at,
            logged_in_at: now_millis(),
        }
    }

    #[test]
    fn test_parse_jwt_exp() {
        assert_eq!(parse_jwt_exp(&jwt_with_exp(1234567890)), Some(1234567890));
        assert_eq!(parse_jwt_exp("not-a-jwt"), None);
        assert_eq!(parse_jwt_exp("a.%%%.c"), None);
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        assert!(store.load().unwrap().is_none());

        store.save(&record("tok", None)).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.user_id, "u1");
        assert_eq!(loaded.token, "tok");

        let session = loaded.into_session();
        assert_eq!(session.role, Role::TaManager);
        assert!(session.permissions.is_none());

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_expired_record_discarded() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        let past = (now_millis() / 1000 - 3600) as u64;
        store.save(&record("tok", Some(past))).unwrap();
        assert!(store.load().unwrap().is_none());
        // The file itself was removed
        assert!(!dir.path().join("auth/session.json").exists());
    }

    #[test]
    fn test_corrupt_record_discarded() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        std::fs::create_dir_all(dir.path().join("auth")).unwrap();
        std::fs::write(dir.path().join("auth/session.json"), "{not json").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_legacy_role_shapes_resolve_on_load() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());

        // A legacy record with a numeric role_id instead of a role string
        std::fs::create_dir_all(dir.path().join("auth")).unwrap();
        std::fs::write(
            dir.path().join("auth/session.json"),
            r#"{"user_id":"u2","name":"Eli","email":"e@x.io","role_id":5,
                "authenticated":true,"token":"tok","expires_at":null,
                "logged_in_at":0}"#,
        )
        .unwrap();

        let session = store.load().unwrap().unwrap().into_session();
        assert_eq!(session.role, Role::Interviewer);
    }
}
