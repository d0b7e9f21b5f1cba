//! Company Profile Aggregation Library
//!
//! Given a company name, combines three sources into one display record:
//!
//! 1. a web-search API lookup (top organic result → description, website),
//! 2. a language-model completion query (the remaining profile fields,
//!    plus a fallback for description and website),
//! 3. an encyclopedia page scrape (final override for the description).
//!
//! The merge precedence is fixed: search → language model → encyclopedia
//! for the description; search → language model for the website; the
//! other seven fields come exclusively from the language model.
//!
//! # Usage
//!
//! ```rust,ignore
//! use company_intel::{Aggregator, IntelConfig};
//!
//! let config = IntelConfig::from_env()?;
//! let aggregator = Aggregator::from_config(&config);
//!
//! let record = aggregator.aggregate("Acme Corp").await?;
//! println!("{}: {}", record.ceo, record.industry);
//! ```
//!
//! # Modules
//!
//! - [`record`] - The fixed-schema company record and related types
//! - [`parser`] - `key: value` completion-text parser
//! - [`fetchers`] - Fetcher traits and their production implementations
//! - [`pipeline`] - The merge pipeline
//! - [`config`] - Environment-backed configuration
//! - [`testing`] - Mock fetchers for tests

pub mod config;
pub mod error;
pub mod fetchers;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod testing;

pub use config::{IntelConfig, DEFAULT_MODEL};
pub use error::{IntelError, Result};
pub use fetchers::{
    format_profile_prompt, EncyclopediaSource, KnowledgeSource, OpenAiKnowledge,
    SerpSnippetSearch, SnippetSearch, WikipediaSummary, PROFILE_PROMPT,
};
pub use parser::parse_profile_text;
pub use pipeline::Aggregator;
pub use record::{CompanyRecord, SearchSnippet, NOT_AVAILABLE};
