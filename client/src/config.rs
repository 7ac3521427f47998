//! Configuration management for the client.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend HTTP configuration
    pub backend: BackendConfig,
    /// Identity persistence configuration
    pub storage: StorageConfig,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Backend HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL all endpoint paths are appended to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// The per-request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Identity persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding the logged-in identity
    pub identity_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            backend: BackendConfig {
                base_url: env::var("BIOSKOP_BASE_URL")
                    .unwrap_or_else(|_| "https://ubaya.cloud/react/160422148/uas".to_string()),
                timeout_secs: env::var("BIOSKOP_HTTP_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            },
            storage: StorageConfig {
                identity_path: env::var("BIOSKOP_IDENTITY_PATH")
                    .map_or_else(|_| PathBuf::from(".bioskop/identity.json"), PathBuf::from),
            },
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = Config::from_env();
        assert!(!config.backend.base_url.is_empty());
        assert!(config.backend.timeout().as_secs() > 0);
    }
}
