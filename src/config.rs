//! Constants and command-line configuration.

use clap::{Parser, ValueEnum};

// Service endpoints (scheme + host only; paths and query shapes are fixed
// for compatibility with the upstream APIs)
/// Default "what is my IP" service.
pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org";
/// Default IP-geolocation service.
pub const DEFAULT_GEO_ENDPOINT: &str = "http://ipwho.is";
/// Default ISS flyover-prediction service.
pub const DEFAULT_FLYOVER_ENDPOINT: &str = "https://iss-flyover.herokuapp.com";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// All three upstream services are plain JSON APIs, so a simple tool
/// identifier is used rather than a browser string.
pub const DEFAULT_USER_AGENT: &str = concat!("iss_spotter/", env!("CARGO_PKG_VERSION"));

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
    /// Verbose debugging output.
    Debug,
    /// Maximum verbosity.
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors.
    Plain,
    /// Structured JSON format.
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have sensible defaults and can be overridden via command-line
/// flags.
///
/// # Examples
///
/// ```bash
/// # Basic usage: look up your IP, geolocate it, print upcoming flyovers
/// iss_spotter
///
/// # Skip the IP lookup if you already know your public address
/// iss_spotter --ip 162.245.144.188
///
/// # Debugging
/// iss_spotter --log-level debug
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "iss_spotter",
    about = "Fetches upcoming ISS flyover times for your current location."
)]
pub struct Config {
    /// Public IP address to use, skipping the IP lookup stage
    #[arg(long)]
    pub ip: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// "What is my IP" service base URL (scheme + host).
    ///
    /// The `?format=json` query shape is fixed; only the host can change.
    /// Mainly useful for pointing tests at a local server.
    #[arg(long, hide = true, default_value = DEFAULT_IP_ENDPOINT)]
    pub ip_endpoint: String,

    /// IP-geolocation service base URL (scheme + host).
    #[arg(long, hide = true, default_value = DEFAULT_GEO_ENDPOINT)]
    pub geo_endpoint: String,

    /// ISS flyover-prediction service base URL (scheme + host).
    #[arg(long, hide = true, default_value = DEFAULT_FLYOVER_ENDPOINT)]
    pub flyover_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            ip_endpoint: DEFAULT_IP_ENDPOINT.to_string(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            flyover_endpoint: DEFAULT_FLYOVER_ENDPOINT.to_string(),
        }
    }
}
