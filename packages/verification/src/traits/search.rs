//! Web search trait for evidence gathering.
//!
//! The verifier cross-checks low-confidence claims against a search
//! provider. This trait abstracts over providers (Tavily, SerpAPI, etc.);
//! the production implementation is [`crate::search::TavilySearch`].

use async_trait::async_trait;

use crate::error::SearchResult;

/// One search result snippet.
#[derive(Debug, Clone, Default)]
pub struct Snippet {
    /// Title of the result page, when the provider gives one.
    pub title: String,

    /// Snippet text. This is what the corroboration heuristic scans.
    pub text: String,

    /// Result URL.
    pub url: String,
}

impl Snippet {
    /// Create a snippet from its text content.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Add a title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add a URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Web search capability for claim evidence.
///
/// Failures are per-query and always recoverable: the verifier annotates
/// the affected claim and moves on. Implementations must be safe to call
/// sequentially for many claims within one request.
#[async_trait]
pub trait SnippetSearch: Send + Sync {
    /// Search the web and return up to `max_results` snippets.
    async fn search(&self, query: &str, max_results: usize) -> SearchResult<Vec<Snippet>>;
}
