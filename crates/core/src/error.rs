//! Error taxonomy for the remote endpoints.

use thiserror::Error;

/// Failure of an airport lookup or flight search call.
///
/// `Transport` covers network failures, non-2xx statuses, and undecodable
/// bodies; `BadShape` means the request round-tripped but the response lacks
/// the expected `data` payload. The UI maps the two to distinct messages for
/// searches and swallows both for suggestion lookups.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response missing expected data payload")]
    BadShape,
}
