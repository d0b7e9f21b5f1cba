//! Fetchers: one external call each, normalized output.
//!
//! Each fetcher performs exactly one network call per request and
//! normalizes its result into the shapes the merge pipeline consumes.
//! The traits are the seams for testing; production implementations wrap
//! the sibling API-client crates.
//!
//! Failure contracts differ by source:
//! - search errors propagate and halt the pipeline;
//! - knowledge errors propagate;
//! - encyclopedia failures are absorbed into an empty string.

pub mod encyclopedia;
pub mod knowledge;
pub mod search;

pub use encyclopedia::WikipediaSummary;
pub use knowledge::{format_profile_prompt, OpenAiKnowledge, PROFILE_PROMPT};
pub use search::SerpSnippetSearch;

use async_trait::async_trait;

use crate::error::Result;
use crate::record::SearchSnippet;

/// Best-effort single-result web search.
#[async_trait]
pub trait SnippetSearch: Send + Sync {
    /// Look up the top search result for a company name.
    ///
    /// Returns an empty snippet when the search has no usable result;
    /// returns an error only when the search API itself failed.
    async fn snippet(&self, company: &str) -> Result<SearchSnippet>;
}

/// Language-model lookup returning free-form profile text.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Ask for a company profile; returns the raw completion text.
    async fn company_profile(&self, company: &str) -> Result<String>;
}

/// Encyclopedia page summary lookup.
///
/// Infallible by contract: any fetch or parse problem degrades to an
/// empty string so the pipeline keeps whatever description it already
/// has.
#[async_trait]
pub trait EncyclopediaSource: Send + Sync {
    /// First paragraphs of the company's encyclopedia page, or `""`.
    async fn summary(&self, company: &str) -> String;
}
