//! Public IP lookup (stage 1).

use log::debug;

use crate::error_handling::FetchError;
use crate::models::IpResponse;

/// Fetches the caller's public IP address from a "what is my IP" service.
///
/// Issues a single GET to `<endpoint>?format=json` and extracts the `ip`
/// field from the JSON body.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `endpoint` - Service base URL (scheme + host), e.g. `https://api.ipify.org`
///
/// # Errors
///
/// * `FetchError::Transport` if the request fails before a response arrives
/// * `FetchError::Status` if the service answers with a non-success status;
///   the error carries the status code and raw body
/// * `FetchError::Malformed` if the body is not JSON of the expected shape
pub async fn fetch_my_ip(client: &reqwest::Client, endpoint: &str) -> Result<String, FetchError> {
    let url = format!("{endpoint}?format=json");
    debug!("fetching public IP from {url}");

    let response = client.get(&url).send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            what: "IP",
            body,
        });
    }

    let parsed: IpResponse =
        serde_json::from_str(&body).map_err(|e| FetchError::malformed("IP", e))?;
    Ok(parsed.ip)
}
