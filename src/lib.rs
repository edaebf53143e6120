//! keepalive - liveness-preservation agent
//!
//! Periodically pings a hosted service's health endpoint so the hosting
//! platform never suspends it for inactivity, logging one line per attempt.

pub mod cli;
pub mod config;
pub mod logging;
pub mod ping;
