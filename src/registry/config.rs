//! Registry client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::TinError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding [`RegistryConfig::base_url`].
pub const ENV_BASE_URL: &str = "ABN_REGISTRY_URL";

/// Environment variable overriding [`RegistryConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "ABN_REGISTRY_TIMEOUT_SECS";

/// Where and how to reach the ABN registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL; requests go to `{base_url}/queryABN`.
    pub base_url: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: None,
        }
    }
}

impl RegistryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `ABN_REGISTRY_URL` and `ABN_REGISTRY_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::Config`] if the timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self, TinError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, TinError> {
        let mut config = Self::default();
        if let Some(url) = var(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(secs) = var(ENV_TIMEOUT_SECS) {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                TinError::Config(format!("{ENV_TIMEOUT_SECS}='{secs}': {e}"))
            })?;
            config.timeout_secs = Some(secs);
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
