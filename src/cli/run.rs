//! Run command implementation

use crate::cli::RunArgs;
use crate::config::{KeepAliveConfig, LogFormat};
use crate::ping::{PingScheduler, Pinger};
use tokio_util::sync::CancellationToken;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Printed once the loop has stopped on a termination signal.
pub const SHUTDOWN_NOTICE: &str = "🛑 Keep-alive stopped";

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &RunArgs,
) -> Result<KeepAliveConfig, Box<dyn std::error::Error>> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        KeepAliveConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        KeepAliveConfig::default()
    };

    // Apply environment variable overrides
    config = config.with_env_overrides();

    // Apply CLI overrides (highest priority)
    if let Some(ref url) = args.url {
        config.target.base_url = url.clone();
    }
    if let Some(interval) = args.interval {
        config.target.interval_minutes = interval;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// One event per line without the subscriber's own timestamp; probe lines
/// already carry a local one.
fn compact_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(writer)
}

/// Initialize tracing based on configuration
pub fn init_tracing(
    config: &crate::config::LoggingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = crate::logging::build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    match config.format {
        LogFormat::Compact => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(compact_layer(std::io::stdout))
                .try_init()?;
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}

/// Termination signal listeners, registered before the loop starts so a
/// failed registration aborts startup instead of leaving an unstoppable loop.
pub struct ShutdownSignals {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(windows)]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl ShutdownSignals {
    /// Register SIGINT and SIGTERM (CTRL+C on Windows).
    pub fn install() -> std::io::Result<Self> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            Ok(Self {
                interrupt: signal(SignalKind::interrupt())?,
                terminate: signal(SignalKind::terminate())?,
            })
        }

        #[cfg(windows)]
        {
            Ok(Self {
                ctrl_c: tokio::signal::windows::ctrl_c()?,
            })
        }
    }

    /// Wait for the first termination signal, then cancel the token.
    pub async fn wait(mut self, cancel_token: CancellationToken) {
        #[cfg(unix)]
        {
            tokio::select! {
                _ = self.interrupt.recv() => {
                    tracing::info!("Received SIGINT, shutting down...");
                }
                _ = self.terminate.recv() => {
                    tracing::info!("Received SIGTERM, shutting down...");
                }
            }
        }

        #[cfg(windows)]
        {
            self.ctrl_c.recv().await;
            tracing::info!("Received CTRL+C, shutting down...");
        }

        cancel_token.cancel();
    }
}

/// Main run command handler
pub async fn run_keepalive(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load and merge configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;
    tracing::debug!(?config, "Loaded configuration");

    // 3. Build the prober and scheduler
    let pinger = Pinger::new(&config.target)?;
    let scheduler = PingScheduler::new(&config.target, pinger);

    // 4. Listen for termination signals
    let signals = ShutdownSignals::install()?;
    let cancel_token = CancellationToken::new();
    let signal_handle = tokio::spawn(signals.wait(cancel_token.clone()));

    // 5. Loop until cancelled
    let probes = scheduler.run(cancel_token.clone()).await;

    // 6. Cleanup
    signal_handle.await?;
    println!("\n{}", SHUTDOWN_NOTICE);
    tracing::debug!(probes, "Keep-alive shut down cleanly");

    Ok(())
}
