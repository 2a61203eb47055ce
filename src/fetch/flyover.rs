//! ISS flyover predictions (stage 3).

use log::debug;

use crate::error_handling::FetchError;
use crate::models::{Coordinates, FlyoverResponse, FlyoverWindow};

/// Fetches upcoming ISS flyover windows for a location.
///
/// Issues a single GET to `<endpoint>/json/?lat=<lat>&lon=<lon>` and
/// extracts the `response` array from the JSON body, preserving order.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `endpoint` - Service base URL (scheme + host)
/// * `coords` - The location to predict flyovers for
///
/// # Errors
///
/// * `FetchError::Transport` if the request fails before a response arrives
/// * `FetchError::Status` if the service answers with a non-success status;
///   the error carries the status code and raw body
/// * `FetchError::Malformed` if the body is not JSON of the expected shape
pub async fn fetch_flyover_times(
    client: &reqwest::Client,
    endpoint: &str,
    coords: &Coordinates,
) -> Result<Vec<FlyoverWindow>, FetchError> {
    let url = format!(
        "{endpoint}/json/?lat={}&lon={}",
        coords.latitude, coords.longitude
    );
    debug!("fetching flyover times from {url}");

    let response = client.get(&url).send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            what: "flyover times",
            body,
        });
    }

    let parsed: FlyoverResponse =
        serde_json::from_str(&body).map_err(|e| FetchError::malformed("flyover", e))?;
    Ok(parsed.response)
}
