//! Keep-alive probing.
//!
//! [`Pinger`] performs a single HTTP probe against the target and classifies
//! the result; [`PingScheduler`] drives the wait-then-probe loop until its
//! cancellation token fires.

mod config;
mod error;
mod outcome;


pub use config::*;
pub use error::*;
pub use outcome::*;

use async_trait::async_trait;
use chrono::Local;
use std::error::Error as StdError;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Something that can be probed once per tick.
#[async_trait]
pub trait Probe: Send + Sync {
    /// URL the probe targets, for logging.
    fn target(&self) -> &str;

    /// Perform one attempt. Never fails; failures are part of the report.
    async fn probe(&self) -> PingReport;
}

/// HTTP prober for a single target URL.
pub struct Pinger {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl Pinger {
    /// Create a pinger for the configured target with the fixed request timeout.
    pub fn new(config: &TargetConfig) -> Result<Self, PingError> {
        Self::with_timeout(
            config.target_url(),
            Duration::from_secs(PING_TIMEOUT_SECONDS),
        )
    }

    /// Create a pinger with a custom timeout (for testing).
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, PingError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue one GET against the target, classify it and log exactly one line.
    pub async fn ping_once(&self) -> PingReport {
        let timestamp = Local::now();
        let start = Instant::now();

        let result = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let outcome = match result {
            Ok(response) => PingOutcome::from_status(response.status().as_u16(), duration_ms),
            Err(e) => Self::classify_error(e, duration_ms),
        };

        let report = PingReport::new(timestamp, self.url.clone(), outcome);
        report.log();
        report
    }

    /// Classify reqwest error into a PingOutcome.
    fn classify_error(e: reqwest::Error, duration_ms: u64) -> PingOutcome {
        if e.is_timeout() {
            PingOutcome::Timeout { duration_ms }
        } else {
            PingOutcome::NetworkFailure {
                message: error_chain(&e),
            }
        }
    }
}

#[async_trait]
impl Probe for Pinger {
    fn target(&self) -> &str {
        &self.url
    }

    async fn probe(&self) -> PingReport {
        self.ping_once().await
    }
}

/// Join an error with its sources; reqwest keeps the useful part
/// (DNS, refused, TLS) in the source chain.
fn error_chain(e: &dyn StdError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Drives the wait-then-probe loop.
pub struct PingScheduler<P: Probe> {
    probe: P,
    base_url: String,
    health_path: String,
    interval_minutes: u64,
    interval: Duration,
}

impl<P: Probe> PingScheduler<P> {
    pub fn new(config: &TargetConfig, probe: P) -> Self {
        Self {
            probe,
            base_url: config.base_url.clone(),
            health_path: config.health_path.clone(),
            interval_minutes: config.interval_minutes,
            interval: config.interval(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run until `cancel` fires. Returns the number of completed probes.
    ///
    /// Probes once immediately, then sleeps a full interval between the end
    /// of one probe and the start of the next. Cancellation interrupts both
    /// the sleep and an in-flight probe.
    pub async fn run(&self, cancel: CancellationToken) -> u64 {
        tracing::info!("🚀 Starting keep-alive for {}", self.base_url);
        tracing::info!("📡 Pinging every {} minutes", self.interval_minutes);
        tracing::info!("🎯 Health endpoint: {}", self.health_path);
        tracing::debug!(target_url = %self.probe.target(), "Keep-alive target resolved");

        let mut completed: u64 = 0;

        if !cancel.is_cancelled() && self.probe_unless_cancelled(&cancel).await {
            completed += 1;
        }

        while !cancel.is_cancelled() {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }

            if cancel.is_cancelled() {
                break;
            }

            if !self.probe_unless_cancelled(&cancel).await {
                break;
            }
            completed += 1;
        }

        tracing::info!(probes = completed, "Keep-alive loop stopped");
        completed
    }

    /// Returns false if the probe was abandoned because of cancellation.
    async fn probe_unless_cancelled(&self, cancel: &CancellationToken) -> bool {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Probe abandoned on shutdown");
                false
            }
            report = self.probe.probe() => {
                tracing::debug!(outcome = report.outcome.label(), "Probe completed");
                true
            }
        }
    }
}
