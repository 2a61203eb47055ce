//! Data shapes exchanged with the upstream services.
//!
//! None of these values outlive a single run: each one is produced by one
//! stage and consumed by the next (or printed).

use serde::Deserialize;

/// A geographic position, as reported by the IP-geolocation service.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// One predicted ISS pass over a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FlyoverWindow {
    /// Rise time as Unix epoch seconds.
    pub risetime: i64,
    /// Visibility duration in seconds.
    pub duration: i64,
}

/// Response envelope from the "what is my IP" service.
#[derive(Debug, Deserialize)]
pub(crate) struct IpResponse {
    pub ip: String,
}

/// Response envelope from the IP-geolocation service.
///
/// `latitude`/`longitude` are absent when `success` is false, so they are
/// optional here and checked after the success gate.
#[derive(Debug, Deserialize)]
pub(crate) struct GeoResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Response envelope from the flyover-prediction service.
#[derive(Debug, Deserialize)]
pub(crate) struct FlyoverResponse {
    pub response: Vec<FlyoverWindow>,
}
