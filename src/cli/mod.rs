//! CLI module for the keep-alive agent
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `run` - Start the keep-alive loop
//! - `ping` - Probe the target once and report the outcome
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Keep a Render service awake, pinging every 10 minutes
//! WEBSITE_URL=https://gym.onrender.com keepalive run --interval 10
//!
//! # One-off check, JSON output
//! keepalive ping --url https://gym.onrender.com --json
//! ```

pub mod completions;
pub mod config;
pub mod ping;
pub mod run;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// keepalive - keep an idle hosted service awake
#[derive(Parser, Debug)]
#[command(
    name = "keepalive",
    version,
    about = "Periodically pings a hosted service so it is never idled out"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the keep-alive loop
    Run(RunArgs),
    /// Ping the target once
    Ping(PingArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "keepalive.toml")]
    pub config: PathBuf,

    /// Override target base URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// Override ping interval (whole minutes)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "KEEPALIVE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct PingArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "keepalive.toml")]
    pub config: PathBuf,

    /// Override target base URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "keepalive.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
