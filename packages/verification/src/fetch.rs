//! Article content acquisition.
//!
//! Fetches raw HTML for a URL and reduces it to plain paragraph text:
//! one HTTP GET with a bounded timeout, then the text of paragraph-level
//! block elements in document order, whitespace-normalized and cut at a
//! configured character cap.

use std::time::Duration;

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::error::{FetchError, FetchResult};
use crate::types::FetchedArticle;

/// Browser-adjacent User-Agent; plenty of news sites refuse obvious bots.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Elements whose text counts as paragraph-level article content.
const PARAGRAPH_SELECTOR: &str = "p, li, blockquote, h1, h2, h3, h4, h5, h6";

/// Fetches article pages and extracts bounded plain text.
pub struct ArticleFetcher {
    client: reqwest::Client,
    timeout: Duration,
    max_chars: usize,
}

impl ArticleFetcher {
    /// Create a fetcher from pipeline configuration.
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: config.fetch_timeout,
            max_chars: config.max_article_chars,
        }
    }

    /// Fetch a URL and return its extracted paragraph text.
    ///
    /// Any non-2xx status, connection failure, or timeout is a
    /// [`FetchError`]; the orchestrator turns it into an error status.
    pub async fn fetch(&self, url: &str) -> FetchResult<FetchedArticle> {
        if url::Url::parse(url).is_err() {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
            });
        }

        debug!(url = %url, "fetching article");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "article request failed");
                FetchError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let text = truncate_chars(&extract_paragraph_text(&html), self.max_chars);
        debug!(url = %url, chars = text.len(), "article text extracted");

        Ok(FetchedArticle::new(url, text))
    }
}

/// Concatenate the text of paragraph-level block elements in document
/// order, whitespace-normalized and joined by single spaces.
fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);

    // The selector is a compile-time constant; parse failure would be a bug
    // in PARAGRAPH_SELECTOR itself.
    let Ok(selector) = Selector::parse(PARAGRAPH_SELECTOR) else {
        return String::new();
    };

    let mut parts = Vec::new();
    for element in document.select(&selector) {
        let text = element
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if !text.is_empty() {
            parts.push(text);
        }
    }

    parts.join(" ")
}

/// Cut a string to at most `max_chars` characters.
///
/// A silent cut, not sentence-aware: the last kept claim context may be
/// mid-sentence.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
