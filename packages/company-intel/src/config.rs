//! Aggregation configuration.
//!
//! Keys are read from the process environment once at startup into an
//! explicit config object that is passed into fetcher constructors;
//! there is no global mutable configuration.

use crate::error::{IntelError, Result};

/// Default completion model when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Configuration for one aggregator instance.
#[derive(Debug, Clone)]
pub struct IntelConfig {
    /// API key for the language-model service
    pub openai_api_key: String,

    /// API key for the search service
    pub serpapi_api_key: String,

    /// Completion model identifier
    pub model: String,
}

impl IntelConfig {
    /// Create a config with explicit keys and the default model.
    pub fn new(openai_api_key: impl Into<String>, serpapi_api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: openai_api_key.into(),
            serpapi_api_key: serpapi_api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the completion model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Load from the process environment, failing fast on missing keys.
    ///
    /// Requires `OPENAI_API_KEY` and `SERPAPI_API_KEY`; honors an
    /// optional `OPENAI_MODEL` override.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| IntelError::Config("OPENAI_API_KEY environment variable is not set".into()))?;
        let serpapi_api_key = std::env::var("SERPAPI_API_KEY")
            .map_err(|_| IntelError::Config("SERPAPI_API_KEY environment variable is not set".into()))?;

        let mut config = Self::new(openai_api_key, serpapi_api_key);
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config = config.with_model(model);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_model() {
        let config = IntelConfig::new("sk-test", "serp-test");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn with_model_overrides() {
        let config = IntelConfig::new("sk-test", "serp-test").with_model("gpt-4o-mini");
        assert_eq!(config.model, "gpt-4o-mini");
    }
}
