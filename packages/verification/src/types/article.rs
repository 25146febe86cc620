//! Fetched article content.

use chrono::{DateTime, Utc};

/// Plain-text article content pulled from a URL.
///
/// Internal to the pipeline; never part of the boundary JSON. The text is
/// already paragraph-extracted and truncated by the fetcher.
#[derive(Debug, Clone)]
pub struct FetchedArticle {
    /// Source URL.
    pub url: String,

    /// Extracted paragraph text, whitespace-normalized and length-bounded.
    pub text: String,

    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

impl FetchedArticle {
    /// Create an article fetched just now.
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            fetched_at: Utc::now(),
        }
    }
}
