//! Console facade
//!
//! Orchestrates the session lifecycle for the view host: login, role
//! resolution, session persistence, permission sync, and the index swap.
//! State lives behind an `RwLock`; the permission index is
//! built off to the side and swapped in whole, so a render either sees
//! the previous complete snapshot or the new one, never a partial build.

use tokio::sync::RwLock;

use heron_client::{ClientConfig, HttpClient};
use shared::error::{AppError, AppResult};
use shared::models::role::Role;
use shared::types::Action;

use crate::authz::{self, PermissionIndex};
use crate::config::ConsoleConfig;
use crate::nav::{MAIN_MENU, VisibleItem, visible_tree};
use crate::session::{Session, SessionRecord, SessionStore};

/// The embeddable console core
pub struct Console {
    client: RwLock<HttpClient>,
    store: SessionStore,
    session: RwLock<Option<Session>>,
}

impl Console {
    pub fn new(config: &ConsoleConfig) -> Self {
        let client_config = ClientConfig::new(config.api_url.clone()).with_timeout(config.timeout);
        Self {
            client: RwLock::new(client_config.build_http_client()),
            store: SessionStore::new(&config.data_dir),
            session: RwLock::new(None),
        }
    }

    /// Restore a persisted session at startup.
    ///
    /// Returns whether a session was restored. The restored session has
    /// no permission index until [`Console::sync_permissions`] runs.
    pub async fn restore(&self) -> AppResult<bool> {
        let record = self
            .store
            .load()
            .map_err(|e| AppError::storage(e.to_string()))?;

        match record {
            Some(record) => {
                let session = record.into_session();
                self.client
                    .write()
                    .await
                    .set_token(Some(session.token.clone()));
                *self.session.write().await = Some(session);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Login with email and password.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        let login = self.client.write().await.login(email, password).await?;
        self.install_session(Session::from_login(&login)).await
    }

    /// Role-bypass login (development convenience path). The resulting
    /// session goes through the same resolution and persistence as a
    /// credentialed login.
    pub async fn login_as(&self, role: Role) -> AppResult<Session> {
        let login = self.client.write().await.login_bypass(role.as_str()).await?;
        self.install_session(Session::from_login(&login)).await
    }

    async fn install_session(&self, session: Session) -> AppResult<Session> {
        if let Err(e) = self.store.save(&SessionRecord::from_session(&session)) {
            tracing::warn!(error = %e, "Failed to persist session record");
        }

        tracing::info!(
            user = %session.user_id,
            role = %session.role,
            "Session established"
        );
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    /// Logout: best-effort server call, then clear local state.
    pub async fn logout(&self) -> AppResult<()> {
        {
            let mut client = self.client.write().await;
            if client.token().is_some() {
                if let Err(e) = client.logout().await {
                    tracing::warn!(error = %e, "Server logout failed, clearing locally");
                }
                client.set_token(None);
            }
        }

        *self.session.write().await = None;
        self.store
            .clear()
            .map_err(|e| AppError::storage(e.to_string()))?;
        Ok(())
    }

    /// Declare the gated permission set and swap in the reconciled index.
    ///
    /// The new index is fully built before the session is touched.
    pub async fn sync_permissions(&self) -> AppResult<PermissionIndex> {
        if self.session.read().await.is_none() {
            return Err(AppError::not_authenticated());
        }

        let outcome = self
            .client
            .read()
            .await
            .sync_permissions(&authz::declared_permissions())
            .await?;

        let index = PermissionIndex::build(&outcome.result, outcome.timestamp);

        let mut guard = self.session.write().await;
        let session = guard.as_mut().ok_or_else(AppError::not_authenticated)?;
        session.set_permissions(index.clone());

        tracing::debug!(
            resources = index.resource_count(),
            synced_at = index.synced_at(),
            "Permission index swapped"
        );
        Ok(index)
    }

    /// Current session snapshot, if authenticated
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Current canonical role, if authenticated
    pub async fn role(&self) -> Option<Role> {
        self.session.read().await.as_ref().map(|s| s.role)
    }

    /// Can the current session perform `action` on `resource`?
    /// Fails closed when unauthenticated or not yet synced.
    pub async fn can(&self, resource: &str, action: Action) -> bool {
        let guard = self.session.read().await;
        authz::has_permission(
            guard.as_ref().and_then(|s| s.permissions.as_ref()),
            resource,
            action,
        )
    }

    /// Can the current session perform any action on `resource`?
    pub async fn can_any(&self, resource: &str) -> bool {
        let guard = self.session.read().await;
        authz::has_any_permission(guard.as_ref().and_then(|s| s.permissions.as_ref()), resource)
    }

    /// Can the current session perform all listed actions on `resource`?
    pub async fn can_all(&self, resource: &str, actions: &[Action]) -> bool {
        let guard = self.session.read().await;
        authz::has_all_permissions(
            guard.as_ref().and_then(|s| s.permissions.as_ref()),
            resource,
            actions,
        )
    }

    /// The menu subset visible to the current role. Empty when
    /// unauthenticated.
    pub async fn visible_menu(&self) -> Vec<VisibleItem> {
        match self.role().await {
            Some(role) => visible_tree(MAIN_MENU, role),
            None => Vec::new(),
        }
    }
}
