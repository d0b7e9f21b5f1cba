//! Pure SerpAPI REST client.
//!
//! A minimal client for the SerpAPI search endpoint. Supports Google
//! engine queries with a bounded result count and typed error reporting.
//!
//! # Example
//!
//! ```rust,ignore
//! use serpapi_client::SerpApiClient;
//!
//! let client = SerpApiClient::new("your-api-key");
//!
//! let response = client.search("Acme Corp", 1).await?;
//! if let Some(top) = response.top_result() {
//!     println!("{:?} -> {:?}", top.title, top.link);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{Result, SerpApiError};
pub use types::{OrganicResult, SearchResponse};

use std::time::Duration;

use tracing::{debug, warn};

const BASE_URL: &str = "https://serpapi.com/search.json";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// SerpAPI client.
#[derive(Clone)]
pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: String,
    engine: String,
}

impl SerpApiClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            api_key: api_key.into(),
            engine: "google".to_string(),
        }
    }

    /// Create from the `SERPAPI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SERPAPI_API_KEY")
            .map_err(|_| SerpApiError::Config("SERPAPI_API_KEY not set".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Use a different search engine (default "google").
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Use a custom HTTP client (for proxies or custom timeouts).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Run a search and return up to `num` organic results.
    ///
    /// An `error` field in the response body is promoted to
    /// [`SerpApiError::Upstream`] so callers never see a half-valid
    /// response.
    pub async fn search(&self, query: &str, num: usize) -> Result<SearchResponse> {
        debug!(query = %query, num, "SerpAPI search starting");

        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("engine", self.engine.as_str()),
                ("q", query),
                ("num", num.to_string().as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = %status, "SerpAPI request rejected");
            return Err(SerpApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let mut response: SearchResponse = serde_json::from_str(&body)?;

        if let Some(message) = response.error.take() {
            warn!(error = %message, "SerpAPI reported an error");
            return Err(SerpApiError::Upstream(message));
        }

        debug!(
            query = %query,
            results = response.organic_results.len(),
            "SerpAPI search completed"
        );

        Ok(response)
    }
}
