//! Configuration for the monitored target.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder base URL used until an operator points the agent somewhere real.
pub const DEFAULT_BASE_URL: &str = "https://your-app-name.onrender.com";

/// Health endpoint appended to the base URL. Not externally configurable.
pub const HEALTH_PATH: &str = "/api/classes";

/// Minutes between probes.
pub const DEFAULT_INTERVAL_MINUTES: u64 = 14;

/// Largest interval whose length in seconds still fits in a `u64`.
pub const MAX_INTERVAL_MINUTES: u64 = u64::MAX / 60;

/// Fixed per-request timeout.
pub const PING_TIMEOUT_SECONDS: u64 = 30;

fn default_health_path() -> String {
    HEALTH_PATH.to_string()
}

/// Target endpoint and schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Root of the monitored service
    pub base_url: String,
    /// Whole minutes between probes
    pub interval_minutes: u64,
    /// Fixed health path, never read from a file or the environment
    #[serde(skip, default = "default_health_path")]
    pub health_path: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            health_path: default_health_path(),
        }
    }
}

impl TargetConfig {
    /// Full probe URL: plain concatenation of base URL and health path.
    pub fn target_url(&self) -> String {
        format!("{}{}", self.base_url, self.health_path)
    }

    /// Sleep between the end of one probe and the start of the next.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.saturating_mul(60))
    }
}
