//! Mock fetchers for testing.
//!
//! Deterministic, configurable stand-ins for the three fetcher traits so
//! pipeline behavior can be tested without any network or AI calls. Each
//! mock records the company names it was asked about, which lets tests
//! assert that a code path made (or did not make) a call.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{IntelError, Result};
use crate::fetchers::{EncyclopediaSource, KnowledgeSource, SnippetSearch};
use crate::record::SearchSnippet;

/// Mock snippet search with canned results per company.
#[derive(Clone, Default)]
pub struct MockSnippetSearch {
    snippets: Arc<RwLock<HashMap<String, SearchSnippet>>>,
    upstream_error: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockSnippetSearch {
    /// Create a mock that returns an empty snippet for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned snippet for a company.
    pub fn with_snippet(self, company: impl Into<String>, snippet: SearchSnippet) -> Self {
        self.snippets.write().unwrap().insert(company.into(), snippet);
        self
    }

    /// Make every call fail with an upstream search error.
    pub fn with_upstream_error(self, message: impl Into<String>) -> Self {
        *self.upstream_error.write().unwrap() = Some(message.into());
        self
    }

    /// Companies this mock was asked about, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl SnippetSearch for MockSnippetSearch {
    async fn snippet(&self, company: &str) -> Result<SearchSnippet> {
        self.calls.write().unwrap().push(company.to_string());

        if let Some(message) = self.upstream_error.read().unwrap().clone() {
            return Err(IntelError::Search(serpapi_client::SerpApiError::Upstream(
                message,
            )));
        }

        Ok(self
            .snippets
            .read()
            .unwrap()
            .get(company)
            .cloned()
            .unwrap_or_else(SearchSnippet::empty))
    }
}

/// Mock knowledge source with canned profile text per company.
#[derive(Clone, Default)]
pub struct MockKnowledge {
    profiles: Arc<RwLock<HashMap<String, String>>>,
    error: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockKnowledge {
    /// Create a mock that returns an empty completion for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add canned profile text for a company.
    pub fn with_profile(self, company: impl Into<String>, text: impl Into<String>) -> Self {
        self.profiles.write().unwrap().insert(company.into(), text.into());
        self
    }

    /// Make every call fail with an API error.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        *self.error.write().unwrap() = Some(message.into());
        self
    }

    /// Companies this mock was asked about, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl KnowledgeSource for MockKnowledge {
    async fn company_profile(&self, company: &str) -> Result<String> {
        self.calls.write().unwrap().push(company.to_string());

        if let Some(message) = self.error.read().unwrap().clone() {
            return Err(IntelError::Knowledge(openai_client::OpenAIError::Api {
                status: 500,
                message,
            }));
        }

        Ok(self
            .profiles
            .read()
            .unwrap()
            .get(company)
            .cloned()
            .unwrap_or_default())
    }
}

/// Mock encyclopedia source with canned summaries per company.
#[derive(Clone, Default)]
pub struct MockEncyclopedia {
    summaries: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockEncyclopedia {
    /// Create a mock that returns an empty summary for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned summary for a company.
    pub fn with_summary(self, company: impl Into<String>, summary: impl Into<String>) -> Self {
        self.summaries
            .write()
            .unwrap()
            .insert(company.into(), summary.into());
        self
    }

    /// Companies this mock was asked about, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl EncyclopediaSource for MockEncyclopedia {
    async fn summary(&self, company: &str) -> String {
        self.calls.write().unwrap().push(company.to_string());

        self.summaries
            .read()
            .unwrap()
            .get(company)
            .cloned()
            .unwrap_or_default()
    }
}
