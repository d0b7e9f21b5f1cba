//! Typed errors for the aggregation library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! distinguish a halted pipeline (search upstream error) from a failed
//! knowledge query or a rejected input.

use thiserror::Error;

/// Errors that can abort an aggregation request.
///
/// Deliberately small: encyclopedia fetch failures and malformed
/// completion lines are absorbed inside their components and never
/// surface here.
#[derive(Debug, Error)]
pub enum IntelError {
    /// Rejected before any network activity
    #[error("company name must not be empty")]
    EmptyCompanyName,

    /// Search API failed or reported an upstream error; surfaced verbatim
    #[error("search failed: {0}")]
    Search(#[from] serpapi_client::SerpApiError),

    /// Language-model query failed
    #[error("knowledge query failed: {0}")]
    Knowledge(#[from] openai_client::OpenAIError),

    /// Missing or invalid configuration, fatal at startup
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for aggregation operations.
pub type Result<T> = std::result::Result<T, IntelError>;
