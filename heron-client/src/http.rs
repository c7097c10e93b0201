//! HTTP client for network-based API calls
//!
//! All request plumbing lives here: bearer-token attachment, request
//! trace IDs, and the status-to-error mapping. 401 responses surface as
//! [`ClientError::Unauthorized`] to the caller; there is no automatic
//! refresh-and-retry.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::response::Envelope;

/// Request trace-id header attached to every outgoing call
const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP client for making network requests to the recruiting API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace or clear the authentication token in place
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn prepare(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let req = req.header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string());
        match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.prepare(self.client.get(&url)).send().await?;
        Self::handle_response(resp).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .prepare(self.client.get(&url).query(query))
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .prepare(self.client.post(&url).json(body))
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.prepare(self.client.post(&url)).send().await?;
        Self::handle_response(resp).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .prepare(self.client.patch(&url).json(body))
            .send()
            .await?;
        Self::handle_response(resp).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.prepare(self.client.delete(&url)).send().await?;
        Self::handle_response(resp).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = Self::error_message(&text);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        resp.json().await.map_err(Into::into)
    }

    /// Pull the human-readable message out of an error body, falling back
    /// to the raw text for non-JSON bodies.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<Envelope<Value>>(body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| body.to_string())
    }
}
