//! Auth API
//!
//! Login, role-bypass login, current-user lookup, and logout.

use serde_json::Value;
use shared::client::{
    BypassLoginRequest, CurrentUserResponse, LoginRequest, LoginResponse,
};
use shared::response::{Envelope, extract_item};

use crate::{ClientError, ClientResult, HttpClient};

impl HttpClient {
    /// Login with email and password.
    ///
    /// On success the returned token is attached to this client for all
    /// subsequent requests.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let resp: Envelope<LoginResponse> = self.post("/api/auth/login", &req).await?;
        let login = resp
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing login data".into()))?;

        self.set_token(Some(login.token.clone()));
        tracing::debug!(user = %login.user.id, "Logged in");
        Ok(login)
    }

    /// Role-bypass login: authenticate as a named role without
    /// credentials. Development deployments only; production servers
    /// reject this endpoint.
    pub async fn login_bypass(&mut self, role: &str) -> ClientResult<LoginResponse> {
        let req = BypassLoginRequest {
            role: role.to_string(),
        };

        let resp: Envelope<LoginResponse> = self.post("/api/auth/bypass", &req).await?;
        let login = resp
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing login data".into()))?;

        self.set_token(Some(login.token.clone()));
        tracing::debug!(role = %role, "Logged in via role bypass");
        Ok(login)
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<CurrentUserResponse> {
        let value: Value = self.get("/api/auth/me").await?;
        extract_item(&value)
            .ok_or_else(|| ClientError::InvalidResponse("Missing user data".into()))
    }

    /// Logout and clear the attached token
    pub async fn logout(&mut self) -> ClientResult<()> {
        let _: Envelope<Value> = self.post_empty("/api/auth/logout").await?;
        self.set_token(None);
        tracing::debug!("Logged out");
        Ok(())
    }
}
