//! Probe outcomes and their rendered log lines.

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use std::fmt;

/// Classification of a single probe attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PingOutcome {
    /// Target answered with a 2xx status
    Success { status: u16, duration_ms: u64 },
    /// Target was reachable but answered with a non-2xx status
    UnexpectedStatus { status: u16, duration_ms: u64 },
    /// No response before the request timeout
    Timeout { duration_ms: u64 },
    /// Transport failure (DNS, refused connection, TLS, ...)
    NetworkFailure { message: String },
}

impl PingOutcome {
    /// Classify a received status code.
    pub fn from_status(status: u16, duration_ms: u64) -> Self {
        if (200..300).contains(&status) {
            PingOutcome::Success {
                status,
                duration_ms,
            }
        } else {
            PingOutcome::UnexpectedStatus {
                status,
                duration_ms,
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PingOutcome::Success { .. })
    }

    /// Glyph leading the log line.
    pub fn marker(&self) -> &'static str {
        match self {
            PingOutcome::Success { .. } => "✅",
            PingOutcome::UnexpectedStatus { .. } => "⚠️",
            PingOutcome::Timeout { .. } => "⏰",
            PingOutcome::NetworkFailure { .. } => "❌",
        }
    }

    /// Stable snake_case name, used as a structured log field.
    pub fn label(&self) -> &'static str {
        match self {
            PingOutcome::Success { .. } => "success",
            PingOutcome::UnexpectedStatus { .. } => "unexpected_status",
            PingOutcome::Timeout { .. } => "timeout",
            PingOutcome::NetworkFailure { .. } => "network_failure",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            PingOutcome::Success { status, .. } | PingOutcome::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn duration_ms(&self) -> Option<u64> {
        match self {
            PingOutcome::Success { duration_ms, .. }
            | PingOutcome::UnexpectedStatus { duration_ms, .. }
            | PingOutcome::Timeout { duration_ms } => Some(*duration_ms),
            PingOutcome::NetworkFailure { .. } => None,
        }
    }
}

impl fmt::Display for PingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingOutcome::Success {
                status,
                duration_ms,
            } => write!(f, "Ping successful ({}) - {}ms", status, duration_ms),
            PingOutcome::UnexpectedStatus {
                status,
                duration_ms,
            } => write!(f, "Ping returned {} - {}ms", status, duration_ms),
            PingOutcome::Timeout { duration_ms } => {
                write!(f, "Ping timeout after {}ms", duration_ms)
            }
            PingOutcome::NetworkFailure { message } => write!(f, "Ping failed: {}", message),
        }
    }
}

/// One completed probe: when it started, what it hit, how it went.
#[derive(Debug, Clone, Serialize)]
pub struct PingReport {
    pub timestamp: DateTime<Local>,
    pub url: String,
    #[serde(flatten)]
    pub outcome: PingOutcome,
}

impl PingReport {
    pub fn new(timestamp: DateTime<Local>, url: impl Into<String>, outcome: PingOutcome) -> Self {
        Self {
            timestamp,
            url: url.into(),
            outcome,
        }
    }

    /// Emit the report as a single log event.
    pub fn log(&self) {
        if self.outcome.is_success() {
            tracing::info!(
                outcome = self.outcome.label(),
                status = self.outcome.status(),
                duration_ms = self.outcome.duration_ms(),
                url = %self.url,
                "{}",
                self
            );
        } else {
            tracing::warn!(
                outcome = self.outcome.label(),
                status = self.outcome.status(),
                duration_ms = self.outcome.duration_ms(),
                url = %self.url,
                "{}",
                self
            );
        }
    }
}

impl fmt::Display for PingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            self.outcome.marker(),
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, false),
            self.outcome
        )
    }
}
