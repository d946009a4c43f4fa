//! Request error types.

use thiserror::Error;

/// Errors that can occur while building or sending a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The transport failed before a response arrived.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The target is not on the page's origin; credentials would leak.
    #[error("Refusing cross-origin request to {0}")]
    CrossOrigin(String),

    /// Non-2xx response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to decode the response body.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Failed to serialize the request payload.
    #[error("Failed to encode payload: {0}")]
    Encode(String),
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::InvalidUrl(e.to_string())
    }
}
