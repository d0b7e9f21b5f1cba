//! Search-snippet fetcher backed by SerpAPI.

use async_trait::async_trait;
use serpapi_client::{SearchResponse, SerpApiClient};
use tracing::debug;

use crate::error::Result;
use crate::fetchers::SnippetSearch;
use crate::record::SearchSnippet;

/// SerpAPI-backed snippet search requesting exactly one organic result.
pub struct SerpSnippetSearch {
    client: SerpApiClient,
}

impl SerpSnippetSearch {
    /// Create a fetcher with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: SerpApiClient::new(api_key),
        }
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: SerpApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SnippetSearch for SerpSnippetSearch {
    async fn snippet(&self, company: &str) -> Result<SearchSnippet> {
        let response = self.client.search(company, 1).await?;
        let snippet = snippet_from_response(&response);

        debug!(
            company,
            has_description = !snippet.description.is_empty(),
            has_website = !snippet.website.is_empty(),
            "search snippet fetched"
        );

        Ok(snippet)
    }
}

/// Normalize a search response into a snippet.
///
/// No organic results yields an empty snippet. A result without a link
/// falls back to its title for the website field; a result without a
/// snippet leaves the description empty.
fn snippet_from_response(response: &SearchResponse) -> SearchSnippet {
    let Some(top) = response.top_result() else {
        return SearchSnippet::empty();
    };

    let description = top.snippet.clone().unwrap_or_default();

    let website = top
        .link
        .clone()
        .filter(|link| !link.is_empty())
        .or_else(|| top.title.clone())
        .unwrap_or_default();

    SearchSnippet {
        description,
        website,
    }
}
