//! Error types for the SerpAPI client.

use thiserror::Error;

/// Result type for SerpAPI client operations.
pub type Result<T> = std::result::Result<T, SerpApiError>;

/// SerpAPI client errors.
#[derive(Debug, Error)]
pub enum SerpApiError {
    /// Configuration error (missing API key)
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection refused, timeout, TLS)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx HTTP response from the API
    #[error("SerpAPI error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered 200 but reported an error in the body.
    ///
    /// SerpAPI signals problems like exhausted quota or an unparseable
    /// query this way; the message is surfaced verbatim.
    #[error("{0}")]
    Upstream(String),

    /// Response body was not the expected JSON shape
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
