//! Backend client configuration.
//!
//! The default base URL points at the production deployment; override via
//! environment variable or explicit construction for staging/testing.

use url::Url;

/// Default production API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.voteradhikarpatra.com";

/// Configuration for connecting to the registration backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend; the `/api/...` paths are joined onto it.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `ADHIKAR_API_URL` (default: `https://api.voteradhikarpatra.com`)
    /// - `ADHIKAR_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("ADHIKAR_API_URL", DEFAULT_BASE_URL)?,
            timeout_secs: std::env::var("ADHIKAR_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at a local mock server (for tests).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the localhost URL cannot be
    /// parsed (should not occur for valid ports, but avoids `expect()`).
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(&format!("http://127.0.0.1:{port}"))
                .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?,
            timeout_secs: 5,
        })
    }

    /// Create a configuration for an explicit base URL string.
    pub fn for_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)
                .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?,
            timeout_secs: 30,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL failed to parse; carries the variable or input and the reason.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
