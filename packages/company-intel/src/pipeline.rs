//! The merge pipeline: orchestrates the three fetchers into one record.
//!
//! One request walks a fixed sequence: validate the name, fetch the
//! search snippet, fetch and parse the knowledge profile, then let the
//! encyclopedia summary override the description. Calls are strictly
//! sequential; there is no shared state across requests.

use tracing::{debug, info};

use crate::config::IntelConfig;
use crate::error::{IntelError, Result};
use crate::fetchers::{
    EncyclopediaSource, KnowledgeSource, OpenAiKnowledge, SerpSnippetSearch, SnippetSearch,
    WikipediaSummary,
};
use crate::parser::parse_profile_text;
use crate::record::CompanyRecord;

/// Orchestrator over the three fetchers.
///
/// Generic over the fetcher traits so tests can swap in mocks.
///
/// # Merge precedence
///
/// - `description`: search snippet → language model → encyclopedia
///   (encyclopedia wins when non-empty);
/// - `website`: search snippet → language model;
/// - the remaining seven fields come exclusively from the language
///   model.
///
/// # Example
///
/// ```rust,ignore
/// let aggregator = Aggregator::from_config(&IntelConfig::from_env()?);
/// let record = aggregator.aggregate("Acme Corp").await?;
/// println!("{}", record.ceo);
/// ```
pub struct Aggregator<S, K, E> {
    search: S,
    knowledge: K,
    encyclopedia: E,
}

impl<S, K, E> Aggregator<S, K, E>
where
    S: SnippetSearch,
    K: KnowledgeSource,
    E: EncyclopediaSource,
{
    /// Create an aggregator from explicit fetchers.
    pub fn new(search: S, knowledge: K, encyclopedia: E) -> Self {
        Self {
            search,
            knowledge,
            encyclopedia,
        }
    }

    /// Aggregate one company profile.
    ///
    /// A search error halts the pipeline before any other fetch; a
    /// knowledge error propagates; encyclopedia failures are absorbed by
    /// the fetcher itself.
    pub async fn aggregate(&self, company: &str) -> Result<CompanyRecord> {
        let company = company.trim();
        if company.is_empty() {
            return Err(IntelError::EmptyCompanyName);
        }

        info!(company, "aggregation starting");

        let snippet = self.search.snippet(company).await?;

        // One knowledge call serves both the description/website fallback
        // and the seven model-exclusive fields.
        let raw = self.knowledge.company_profile(company).await?;
        let mut record = parse_profile_text(&raw);

        if !snippet.description.is_empty() {
            record.description = snippet.description;
        }
        if !snippet.website.is_empty() {
            record.website = snippet.website;
        }

        let summary = self.encyclopedia.summary(company).await;
        if !summary.is_empty() {
            debug!(company, "encyclopedia summary overrides description");
            record.description = summary;
        }

        info!(company, "aggregation complete");
        Ok(record)
    }
}

impl Aggregator<SerpSnippetSearch, OpenAiKnowledge, WikipediaSummary> {
    /// Wire up the production fetchers from one config object.
    pub fn from_config(config: &IntelConfig) -> Self {
        Self::new(
            SerpSnippetSearch::new(config.serpapi_api_key.clone()),
            OpenAiKnowledge::from_config(config),
            WikipediaSummary::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{SearchSnippet, NOT_AVAILABLE};
    use crate::testing::{MockEncyclopedia, MockKnowledge, MockSnippetSearch};

    fn aggregator(
        search: MockSnippetSearch,
        knowledge: MockKnowledge,
        encyclopedia: MockEncyclopedia,
    ) -> Aggregator<MockSnippetSearch, MockKnowledge, MockEncyclopedia> {
        Aggregator::new(search, knowledge, encyclopedia)
    }

    #[tokio::test]
    async fn empty_name_is_rejected_before_any_call() {
        let search = MockSnippetSearch::new();
        let knowledge = MockKnowledge::new();
        let encyclopedia = MockEncyclopedia::new();

        let agg = aggregator(search, knowledge, encyclopedia);
        let err = agg.aggregate("   ").await.unwrap_err();

        assert!(matches!(err, IntelError::EmptyCompanyName));
        assert_eq!(agg.search.call_count(), 0);
        assert_eq!(agg.knowledge.call_count(), 0);
        assert_eq!(agg.encyclopedia.call_count(), 0);
    }

    #[tokio::test]
    async fn search_error_halts_before_knowledge() {
        let search = MockSnippetSearch::new().with_upstream_error("quota exhausted");
        let knowledge = MockKnowledge::new().with_profile("Acme", "CEO: Jane");
        let encyclopedia = MockEncyclopedia::new();

        let agg = aggregator(search, knowledge, encyclopedia);
        let err = agg.aggregate("Acme").await.unwrap_err();

        assert!(matches!(err, IntelError::Search(_)));
        assert_eq!(agg.knowledge.call_count(), 0);
        assert_eq!(agg.encyclopedia.call_count(), 0);
    }

    #[tokio::test]
    async fn snippet_wins_over_model_for_description_and_website() {
        let search = MockSnippetSearch::new()
            .with_snippet("Acme", SearchSnippet::new("Acme makes rockets", "acme.com"));
        let knowledge = MockKnowledge::new()
            .with_profile("Acme", "Description: A model view\nWebsite: model.example");
        let encyclopedia = MockEncyclopedia::new();

        let record = aggregator(search, knowledge, encyclopedia)
            .aggregate("Acme")
            .await
            .unwrap();

        assert_eq!(record.description, "Acme makes rockets");
        assert_eq!(record.website, "acme.com");
    }

    #[tokio::test]
    async fn empty_snippet_falls_back_to_model_values() {
        let search = MockSnippetSearch::new();
        let knowledge = MockKnowledge::new()
            .with_profile("Acme", "Description: A model view\nWebsite: model.example");
        let encyclopedia = MockEncyclopedia::new();

        let record = aggregator(search, knowledge, encyclopedia)
            .aggregate("Acme")
            .await
            .unwrap();

        assert_eq!(record.description, "A model view");
        assert_eq!(record.website, "model.example");
    }

    #[tokio::test]
    async fn encyclopedia_overrides_description_but_not_website() {
        let search = MockSnippetSearch::new()
            .with_snippet("Acme", SearchSnippet::new("Acme makes rockets", "acme.com"));
        let knowledge = MockKnowledge::new().with_profile("Acme", "CEO: Wile E.");
        let encyclopedia =
            MockEncyclopedia::new().with_summary("Acme", "Acme Corporation is fictional.");

        let record = aggregator(search, knowledge, encyclopedia)
            .aggregate("Acme")
            .await
            .unwrap();

        assert_eq!(record.description, "Acme Corporation is fictional.");
        assert_eq!(record.website, "acme.com");
        assert_eq!(record.ceo, "Wile E.");
    }

    #[tokio::test]
    async fn name_is_trimmed_before_fetching() {
        let search = MockSnippetSearch::new();
        let knowledge = MockKnowledge::new().with_profile("Acme", "CEO: Jane");
        let encyclopedia = MockEncyclopedia::new();

        let agg = aggregator(search, knowledge, encyclopedia);
        let record = agg.aggregate("  Acme  ").await.unwrap();

        assert_eq!(record.ceo, "Jane");
        assert_eq!(agg.search.calls(), vec!["Acme".to_string()]);
    }

    #[tokio::test]
    async fn knowledge_error_propagates() {
        let search = MockSnippetSearch::new();
        let knowledge = MockKnowledge::new().with_error("model unavailable");
        let encyclopedia = MockEncyclopedia::new();

        let agg = aggregator(search, knowledge, encyclopedia);
        let err = agg.aggregate("Acme").await.unwrap_err();

        assert!(matches!(err, IntelError::Knowledge(_)));
        assert_eq!(agg.encyclopedia.call_count(), 0);
    }

    #[tokio::test]
    async fn unmatched_profile_leaves_sentinels() {
        let search = MockSnippetSearch::new();
        let knowledge = MockKnowledge::new().with_profile("Acme", "no separators here");
        let encyclopedia = MockEncyclopedia::new();

        let record = aggregator(search, knowledge, encyclopedia)
            .aggregate("Acme")
            .await
            .unwrap();

        assert_eq!(record.ceo, NOT_AVAILABLE);
        assert_eq!(record.description, NOT_AVAILABLE);
    }
}
