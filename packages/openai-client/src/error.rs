//! Error types for the OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection refused, timeout, TLS)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the API (rate limit, invalid request, auth)
    #[error("OpenAI API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response arrived but was not the expected shape
    #[error("parse error: {0}")]
    Parse(String),

    /// The API returned a response with no choices
    #[error("no completion returned")]
    EmptyCompletion,
}
