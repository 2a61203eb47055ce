//! iss_spotter library: ISS flyover lookup pipeline
//!
//! This library answers one question: when will the International Space
//! Station next be visible overhead? It does so in three sequential stages,
//! each a single HTTP GET against a public service:
//!
//! 1. Fetch the caller's public IP address
//! 2. Geolocate that IP to latitude/longitude coordinates
//! 3. Fetch predicted ISS flyover windows for those coordinates
//!
//! Each stage depends only on its predecessor's result; the first failure
//! halts the chain. There is no caching, no retrying, and no concurrency.
//!
//! # Example
//!
//! ```no_run
//! use iss_spotter::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_lookup(Config::default()).await?;
//! for pass in &report.passes {
//!     println!("rise {} duration {}s", pass.risetime, pass.duration);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError};
pub use models::{Coordinates, FlyoverWindow};
pub use run::{run_lookup, LookupReport};

// Internal run module (contains the pipeline sequencing logic)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::fetch::{fetch_coords_by_ip, fetch_flyover_times, fetch_my_ip};
    use crate::initialization::init_client;
    use crate::models::{Coordinates, FlyoverWindow};

    /// Results of a completed flyover lookup.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// The public IP address the lookup was performed for.
        pub ip: String,
        /// The coordinates the IP resolved to.
        pub coords: Coordinates,
        /// Predicted flyover windows, in the order the service returned them.
        pub passes: Vec<FlyoverWindow>,
    }

    /// Runs the full lookup pipeline with the provided configuration.
    ///
    /// This is the main entry point for the library. The three stages run
    /// strictly in sequence; each one starts only after its predecessor
    /// succeeded, and the first error aborts the chain. If `config.ip` is
    /// set, the IP-lookup stage is skipped and that address is geolocated
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or if any stage
    /// fails (transport failure, non-success status, service rejection, or
    /// a malformed response body).
    pub async fn run_lookup(config: Config) -> Result<LookupReport> {
        let client = init_client(&config).context("Failed to build HTTP client")?;

        let ip = match config.ip {
            Some(ref ip) => {
                info!("using provided IP address {ip}");
                ip.clone()
            }
            None => {
                let ip = fetch_my_ip(&client, &config.ip_endpoint)
                    .await
                    .context("Failed to fetch public IP address")?;
                info!("public IP address: {ip}");
                ip
            }
        };

        let coords = fetch_coords_by_ip(&client, &config.geo_endpoint, &ip)
            .await
            .context("Failed to geolocate IP address")?;
        info!(
            "coordinates: {}, {}",
            coords.latitude, coords.longitude
        );

        let passes = fetch_flyover_times(&client, &config.flyover_endpoint, &coords)
            .await
            .context("Failed to fetch ISS flyover times")?;
        info!("received {} flyover window(s)", passes.len());

        Ok(LookupReport { ip, coords, passes })
    }
}
