//! Error types for the JSON HTTP client.
//!
//! # Design
//! Every failure of `get`/`post` lands in one `FetchError`. A non-2xx status
//! carries the fully built URL so callers can tell which request failed
//! without keeping their own bookkeeping.

use thiserror::Error;

/// Errors returned by `HttpClient` operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The network round-trip could not complete (DNS, refused connection,
    /// broken body stream).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a status outside `200..=299`.
    #[error("{url} responded with status code {status}")]
    RequestFailed { url: String, status: u16 },

    /// The response body is not valid JSON.
    #[error("failed to parse response body: {0}")]
    Parse(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
