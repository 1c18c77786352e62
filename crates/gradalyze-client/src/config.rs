//! Backend API configuration and shared HTTP client.

use std::time::Duration;

use gradalyze_core::defaults;
use gradalyze_core::{Error, Result};

/// Configuration for the Gradalyze backend API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_string(),
            timeout_secs: defaults::API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables (with defaults).
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `GRADALYZE_API_BASE` | `http://127.0.0.1:8000` | Backend base URL |
    /// | `GRADALYZE_API_TIMEOUT_SECS` | `60` | Request timeout |
    pub fn from_env() -> Self {
        let base_url = std::env::var(defaults::ENV_API_BASE)
            .unwrap_or_else(|_| defaults::API_BASE_URL.to_string());
        let timeout_secs = std::env::var(defaults::ENV_API_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::API_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }
}

/// Shared HTTP client for all gateways. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        tracing::info!(base_url = %config.base_url, "initializing Gradalyze API client");

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
