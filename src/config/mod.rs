//! Configuration module for the keep-alive agent
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`WEBSITE_URL`, `PING_INTERVAL`, `KEEPALIVE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use keepalive::config::KeepAliveConfig;
//!
//! // Load defaults
//! let config = KeepAliveConfig::default();
//! assert_eq!(config.target.interval_minutes, 14);
//!
//! // Parse from TOML
//! let toml = r#"
//! [target]
//! base_url = "https://gym.example.com"
//! "#;
//! let config: KeepAliveConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.target.target_url(), "https://gym.example.com/api/classes");
//! ```

pub mod error;
pub mod logging;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

// Re-export TargetConfig from ping module
pub use crate::ping::TargetConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the target base URL.
pub const ENV_WEBSITE_URL: &str = "WEBSITE_URL";
/// Environment variable holding the ping interval in minutes.
pub const ENV_PING_INTERVAL: &str = "PING_INTERVAL";
pub const ENV_LOG_LEVEL: &str = "KEEPALIVE_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "KEEPALIVE_LOG_FORMAT";

/// Unified configuration for the keep-alive agent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeepAliveConfig {
    /// Monitored endpoint and schedule
    pub target: TargetConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl KeepAliveConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Invalid values are silently ignored (previous values are kept).
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_WEBSITE_URL) {
            if !url.is_empty() {
                self.target.base_url = url;
            }
        }
        if let Some(interval) = lookup(ENV_PING_INTERVAL) {
            if let Ok(minutes) = interval.trim().parse() {
                self.target.interval_minutes = minutes;
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.target.base_url;
        if base_url.is_empty() {
            return Err(ConfigError::Validation {
                field: "target.base_url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Validation {
                field: "target.base_url".to_string(),
                message: format!("URL must start with http:// or https://, got '{}'", base_url),
            });
        }

        if self.target.interval_minutes == 0 {
            return Err(ConfigError::Validation {
                field: "target.interval_minutes".to_string(),
                message: "interval must be at least 1 minute".to_string(),
            });
        }
        if self.target.interval_minutes > crate::ping::MAX_INTERVAL_MINUTES {
            return Err(ConfigError::Validation {
                field: "target.interval_minutes".to_string(),
                message: format!(
                    "interval must be at most {} minutes",
                    crate::ping::MAX_INTERVAL_MINUTES
                ),
            });
        }

        Ok(())
    }
}
