//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iss_spotter` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use clap::Parser;
use std::process;

use iss_spotter::initialization::init_logger_with;
use iss_spotter::{run_lookup, Config, FlyoverWindow};

/// Formats one predicted pass for terminal output.
fn format_pass(pass: &FlyoverWindow) -> String {
    let when = match Local.timestamp_opt(pass.risetime, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%a %b %e %Y %H:%M:%S %Z").to_string(),
        // Out-of-range or ambiguous timestamps fall back to the raw value
        _ => format!("epoch {}", pass.risetime),
    };
    format!("Next pass at {} for {} seconds!", when, pass.duration)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_lookup(config).await {
        Ok(report) => {
            if report.passes.is_empty() {
                println!("No upcoming ISS passes predicted for your location.");
            } else {
                for pass in &report.passes {
                    println!("{}", format_pass(pass));
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("iss_spotter error: {:#}", e);
            process::exit(1);
        }
    }
}
