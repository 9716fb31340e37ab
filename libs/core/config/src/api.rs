use std::time::Duration;

use crate::{env_or_default, env_required, ConfigError, FromEnv};

/// Default per-request deadline for calls against the products API.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Remote products API configuration
///
/// Passed explicitly into the HTTP gateway so tests can substitute a stub
/// base URL and a short timeout without touching process-wide state.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL endpoint paths are appended to, e.g. "https://api.example.com/api"
    pub base_url: String,
    /// Deadline applied to each outbound request
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl FromEnv for ApiConfig {
    /// Reads from environment variables:
    /// - PRODUCT_API_URL: required (no default)
    /// - PRODUCT_API_TIMEOUT_MS: defaults to 10000
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_required("PRODUCT_API_URL")?;
        let timeout_ms: u64 = env_or_default("PRODUCT_API_TIMEOUT_MS", "10000")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PRODUCT_API_TIMEOUT_MS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}
