//! Error type definitions.
//!
//! This module defines the error types used throughout the application.
//!
//! The three lookup stages share a single [`FetchError`] taxonomy. The
//! upstream services signal failure differently (ipify and the flyover API
//! use HTTP status; ipwho.is uses an in-band `success` flag), so the
//! variants below cover both styles.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors produced by the three lookup stages.
///
/// Every stage fails in exactly one of these ways; there are no retries and
/// no recovery, so a `FetchError` always terminates its stage.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request failed before a response was obtained (DNS, connection,
    /// timeout at the transport layer).
    #[error("request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// A response arrived with a non-success status code. Carries the raw
    /// body for diagnostics.
    #[error("status code {status} when fetching {what}. Response: {body}")]
    Status {
        /// The HTTP status code returned by the service.
        status: reqwest::StatusCode,
        /// What was being fetched when the status was returned.
        what: &'static str,
        /// The raw response body.
        body: String,
    },

    /// The geolocation service answered but reported failure via its
    /// `success` field.
    #[error("geolocation failed: {message} (when fetching for IP {ip})")]
    Rejected {
        /// The service's own failure message.
        message: String,
        /// The IP address echoed back by the service.
        ip: String,
    },

    /// The response body was not valid JSON or lacked an expected field.
    #[error("malformed {what} response: {reason}")]
    Malformed {
        /// What was being fetched when the body failed to parse.
        what: &'static str,
        /// Why the body could not be used.
        reason: String,
    },
}

impl FetchError {
    /// Builds a `Malformed` error from a serde_json parse failure.
    pub(crate) fn malformed(what: &'static str, err: serde_json::Error) -> Self {
        FetchError::Malformed {
            what,
            reason: err.to_string(),
        }
    }
}
