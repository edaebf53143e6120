//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation {
            field: "target.interval_minutes".to_string(),
            message: "interval must be at least 1 minute".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'target.interval_minutes': interval must be at least 1 minute"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("keepalive.toml"));
        assert_eq!(err.to_string(), "Config file not found: keepalive.toml");
    }
}
