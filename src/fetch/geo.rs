//! IP geolocation (stage 2).

use log::debug;

use crate::error_handling::FetchError;
use crate::models::{Coordinates, GeoResponse};

/// Resolves an IP address to geographic coordinates.
///
/// Issues a single GET to `<endpoint>/<ip>`. The service reports failure
/// in-band via a `success` field rather than via HTTP status, so no status
/// check is performed here; the body is parsed regardless and the `success`
/// flag decides the outcome.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `endpoint` - Service base URL (scheme + host), e.g. `http://ipwho.is`
/// * `ip` - The IP address to geolocate, in textual form
///
/// # Errors
///
/// * `FetchError::Transport` if the request fails before a response arrives
/// * `FetchError::Rejected` if the service reports `success: false`; the
///   error carries the service's message and the IP it echoed back
/// * `FetchError::Malformed` if the body is not JSON of the expected shape,
///   or `success` is true but the coordinates are missing
pub async fn fetch_coords_by_ip(
    client: &reqwest::Client,
    endpoint: &str,
    ip: &str,
) -> Result<Coordinates, FetchError> {
    let url = format!("{endpoint}/{ip}");
    debug!("geolocating {ip} via {url}");

    let response = client.get(&url).send().await?;
    let body = response.text().await?;

    let parsed: GeoResponse =
        serde_json::from_str(&body).map_err(|e| FetchError::malformed("geolocation", e))?;

    if !parsed.success {
        return Err(FetchError::Rejected {
            message: parsed
                .message
                .unwrap_or_else(|| "no message provided".to_string()),
            ip: parsed.ip.unwrap_or_else(|| ip.to_string()),
        });
    }

    match (parsed.latitude, parsed.longitude) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates {
            latitude,
            longitude,
        }),
        _ => Err(FetchError::Malformed {
            what: "geolocation",
            reason: "missing latitude/longitude fields".to_string(),
        }),
    }
}
