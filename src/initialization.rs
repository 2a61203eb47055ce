//! Logger and HTTP client setup.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use log::LevelFilter;
use reqwest::ClientBuilder;

use crate::config::{Config, LogFormat};
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it. This allows developers to
/// use `RUST_LOG=debug` for quick debugging while still supporting explicit
/// CLI control via `--log-level`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    // Override with CLI-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("iss_spotter", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() avoids panicking if the logger is already initialized,
    // which matters for tests that set it up more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Initializes the HTTP client shared by all three lookup stages.
///
/// Creates a `reqwest::Client` configured with the timeout and User-Agent
/// from the provided configuration. No timeout beyond this per-request one
/// is applied anywhere in the pipeline.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_init_logger_does_not_panic() {
        // env_logger can only be initialized once per process, so accept
        // either outcome; the important thing is that nothing panics
        let result = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(result.is_ok() || result.is_err());

        let result = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config::default();
        let client = init_client(&config);
        assert!(client.is_ok());
    }
}
