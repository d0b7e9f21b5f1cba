//! Encyclopedia-description fetcher (Wikipedia scrape).
//!
//! Fetches `https://en.wikipedia.org/wiki/{name}` (the name is
//! substituted directly into the path, with no URL-encoding and no
//! disambiguation handling) and extracts the leading body paragraphs.
//! Every failure mode degrades to an empty string.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::fetchers::EncyclopediaSource;

const WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/wiki";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How many leading paragraphs make up the summary.
const PARAGRAPH_COUNT: usize = 2;

/// Wikipedia-backed encyclopedia source.
pub struct WikipediaSummary {
    client: reqwest::Client,
    base_url: String,
}

impl Default for WikipediaSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl WikipediaSummary {
    /// Create a fetcher against the live site.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            base_url: WIKIPEDIA_BASE.to_string(),
        }
    }

    /// Point at a different host (for mirrors or tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn page_url(&self, company: &str) -> String {
        format!("{}/{}", self.base_url, company)
    }
}

#[async_trait]
impl EncyclopediaSource for WikipediaSummary {
    async fn summary(&self, company: &str) -> String {
        let url = self.page_url(company);
        debug!(url = %url, "encyclopedia fetch starting");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "encyclopedia fetch failed");
                return String::new();
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "encyclopedia page not available");
            return String::new();
        }

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                warn!(url = %url, error = %e, "encyclopedia body read failed");
                return String::new();
            }
        };

        let summary = leading_paragraphs(&html, PARAGRAPH_COUNT);
        debug!(url = %url, chars = summary.len(), "encyclopedia summary extracted");
        summary
    }
}

/// Join the text of the first `count` non-empty `<p>` elements.
fn leading_paragraphs(html: &str, count: usize) -> String {
    let p_pattern = regex::Regex::new(r"(?s)<p[^>]*>(.*?)</p>").unwrap();

    let paragraphs: Vec<String> = p_pattern
        .captures_iter(html)
        .filter_map(|cap| {
            let text = strip_tags(cap.get(1)?.as_str());
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .take(count)
        .collect();

    paragraphs.join(" ").trim().to_string()
}

/// Remove markup and decode the common HTML entities.
fn strip_tags(html: &str) -> String {
    let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
    let text = tag_pattern.replace_all(html, "");

    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_two_paragraphs() {
        let html = "<html><body>\
            <p>First paragraph.</p>\
            <p>Second paragraph.</p>\
            <p>Third paragraph.</p>\
            </body></html>";

        assert_eq!(
            leading_paragraphs(html, 2),
            "First paragraph. Second paragraph."
        );
    }

    #[test]
    fn skips_empty_paragraphs() {
        // Wikipedia articles often open with an empty <p class="mw-empty-elt">.
        let html = r#"<p class="mw-empty-elt"></p><p>Acme is a company.</p>"#;
        assert_eq!(leading_paragraphs(html, 2), "Acme is a company.");
    }

    #[test]
    fn strips_nested_markup_and_entities() {
        let html = "<p><b>Acme</b> &amp; Sons, a <a href=\"/wiki/Rocket\">rocket</a> maker.</p>";
        assert_eq!(leading_paragraphs(html, 2), "Acme & Sons, a rocket maker.");
    }

    #[test]
    fn no_paragraphs_yields_empty() {
        assert_eq!(leading_paragraphs("<html><body>nothing</body></html>", 2), "");
    }

    #[test]
    fn page_url_substitutes_name_directly() {
        let fetcher = WikipediaSummary::new();
        assert_eq!(
            fetcher.page_url("Acme Corp"),
            "https://en.wikipedia.org/wiki/Acme Corp"
        );
    }
}
