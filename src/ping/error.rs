//! Error types for the pinger.

use thiserror::Error;

/// Errors raised while setting up probing.
///
/// Probe failures themselves are never errors; they are classified into
/// [`PingOutcome`](super::PingOutcome) values.
#[derive(Debug, Error)]
pub enum PingError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
