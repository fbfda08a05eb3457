use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_PREFIX, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Where the REST gateway lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server URL (e.g. "https://clinic.example.com")
    pub base_url: String,
    /// Path prefix put in front of every resource path
    pub api_prefix: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(ConfigError::api(format!(
                "api.api_prefix must be empty or start with '/', got {}",
                self.api_prefix
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
