//! Console configuration
//!
//! Settings come from the environment (with `.env` support) so the same
//! binary serves development and packaged deployments.

use std::path::PathBuf;

/// Console settings
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Recruiting API base URL
    pub api_url: String,
    /// Directory for the persisted session record and file logs
    pub data_dir: PathBuf,
    /// Log level (overridable via `RUST_LOG`)
    pub log_level: String,
    /// JSON log output (production) vs pretty (development)
    pub log_json: bool,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl ConsoleConfig {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `HERON_API_URL`, `HERON_DATA_DIR`,
    /// `HERON_LOG_LEVEL`, `HERON_LOG_JSON`, `HERON_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            api_url: std::env::var("HERON_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            data_dir: std::env::var("HERON_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./heron-data")),
            log_level: std::env::var("HERON_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_json: std::env::var("HERON_LOG_JSON")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false),
            timeout: std::env::var("HERON_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Set the API base URL
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            data_dir: PathBuf::from("./heron-data"),
            log_level: "info".to_string(),
            log_json: false,
            timeout: 30,
        }
    }
}
