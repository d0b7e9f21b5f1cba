//! Knowledge-query fetcher backed by the OpenAI chat completions API.

use async_trait::async_trait;
use openai_client::OpenAIClient;
use tracing::debug;

use crate::config::IntelConfig;
use crate::error::Result;
use crate::fetchers::KnowledgeSource;

/// Prompt template for the profile query.
///
/// One user-role message, no system prompt; the response is free-form
/// text handed to the line parser.
pub const PROFILE_PROMPT: &str = "Get the CEO, industry, career opportunities, products, \
location, competitors, and email of {name}";

/// Substitute the company name into the profile prompt.
pub fn format_profile_prompt(company: &str) -> String {
    PROFILE_PROMPT.replace("{name}", company)
}

/// OpenAI-backed knowledge source.
pub struct OpenAiKnowledge {
    client: OpenAIClient,
    model: String,
}

impl OpenAiKnowledge {
    /// Wrap a client with the model to query.
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build from an [`IntelConfig`].
    pub fn from_config(config: &IntelConfig) -> Self {
        Self::new(
            OpenAIClient::new(config.openai_api_key.clone()),
            config.model.clone(),
        )
    }
}

#[async_trait]
impl KnowledgeSource for OpenAiKnowledge {
    async fn company_profile(&self, company: &str) -> Result<String> {
        let prompt = format_profile_prompt(company);
        let text = self.client.complete(&self.model, prompt).await?;

        debug!(
            company,
            model = %self.model,
            chars = text.len(),
            "knowledge profile fetched"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_substitutes_name() {
        let prompt = format_profile_prompt("Acme Corp");
        assert!(prompt.ends_with("of Acme Corp"));
        assert!(!prompt.contains("{name}"));
    }
}
