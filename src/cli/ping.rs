//! Ping command implementation

use crate::cli::PingArgs;
use crate::config::KeepAliveConfig;
use crate::ping::{PingOutcome, PingReport, Pinger};
use colored::Colorize;

/// Load configuration for a one-off probe
pub fn load_ping_config(args: &PingArgs) -> Result<KeepAliveConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        KeepAliveConfig::load(Some(&args.config))?
    } else {
        KeepAliveConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(ref url) = args.url {
        config.target.base_url = url.clone();
    }

    Ok(config)
}

/// Format a report for the terminal
pub fn format_report(report: &PingReport, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(report).unwrap_or_else(|_| report.to_string());
    }

    let line = report.to_string();
    match report.outcome {
        PingOutcome::Success { .. } => line.green().to_string(),
        PingOutcome::UnexpectedStatus { .. } => line.yellow().to_string(),
        PingOutcome::Timeout { .. } | PingOutcome::NetworkFailure { .. } => {
            line.red().to_string()
        }
    }
}

/// Handle `keepalive ping` command
///
/// Fails (non-zero exit) unless the target answered with a 2xx status.
pub async fn handle_ping(args: &PingArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_ping_config(args)?;
    config.validate()?;

    let pinger = Pinger::new(&config.target)?;
    let report = pinger.ping_once().await;

    println!("{}", format_report(&report, args.json));

    if report.outcome.is_success() {
        Ok(())
    } else {
        Err(format!(
            "{} did not answer with a 2xx status ({})",
            report.url,
            report.outcome.label()
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use std::path::PathBuf;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args_for(url: String, json: bool) -> PingArgs {
        PingArgs {
            config: PathBuf::from("nonexistent.toml"),
            url: Some(url),
            json,
        }
    }

    #[test]
    fn test_format_report_plain_contains_line() {
        colored::control::set_override(false);
        let report = PingReport::new(
            Local::now(),
            "http://localhost/api/classes",
            PingOutcome::from_status(200, 14),
        );
        let output = format_report(&report, false);
        assert!(output.starts_with("✅ "));
        assert!(output.ends_with("Ping successful (200) - 14ms"));
    }

    #[test]
    fn test_format_report_json() {
        let report = PingReport::new(
            Local::now(),
            "http://localhost/api/classes",
            PingOutcome::Timeout { duration_ms: 30000 },
        );
        let output = format_report(&report, true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["outcome"], "timeout");
        assert_eq!(value["duration_ms"], 30000);
    }

    #[test]
    fn test_load_ping_config_url_override() {
        let args = args_for("http://localhost:5000".to_string(), false);
        let config = load_ping_config(&args).unwrap();
        assert_eq!(
            config.target.target_url(),
            "http://localhost:5000/api/classes"
        );
    }

    #[tokio::test]
    async fn test_handle_ping_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/classes"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let args = args_for(mock_server.uri(), false);
        assert!(handle_ping(&args).await.is_ok());
    }

    #[tokio::test]
    async fn test_handle_ping_unexpected_status_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/classes"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let args = args_for(mock_server.uri(), true);
        let err = handle_ping(&args).await.unwrap_err();
        assert!(err.to_string().contains("unexpected_status"));
    }

    #[tokio::test]
    async fn test_handle_ping_invalid_url_rejected() {
        let args = args_for("ftp://example.com".to_string(), false);
        let err = handle_ping(&args).await.unwrap_err();
        assert!(err.to_string().contains("target.base_url"));
    }
}
