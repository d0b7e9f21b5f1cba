//! SerpAPI response types.
//!
//! Only the fields this client consumes are modeled; SerpAPI responses
//! carry many more sections (ads, knowledge graph, pagination) that are
//! ignored during deserialization.

use serde::Deserialize;

/// Top-level search response.
///
/// A successful query may still carry zero organic results. An `error`
/// string means the API rejected or failed the query; callers should
/// treat it as fatal for the request.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Organic (non-ad) results, best match first.
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,

    /// Error message reported by the API inside a 200 response.
    #[serde(default)]
    pub error: Option<String>,
}

impl SearchResponse {
    /// First organic result, if any.
    pub fn top_result(&self) -> Option<&OrganicResult> {
        self.organic_results.first()
    }
}

/// A single organic search result.
///
/// Every field is optional: SerpAPI omits keys it has no value for
/// rather than sending nulls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    /// Result title.
    #[serde(default)]
    pub title: Option<String>,

    /// Destination URL.
    #[serde(default)]
    pub link: Option<String>,

    /// Short text excerpt shown under the title.
    #[serde(default)]
    pub snippet: Option<String>,
}
