//! Tavily-backed snippet search.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{SearchError, SearchResult};
use crate::security::SecretString;
use crate::traits::{Snippet, SnippetSearch};

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";

#[derive(serde::Serialize)]
struct TavilyRequest {
    query: String,
    search_depth: String,
    max_results: usize,
}

#[derive(serde::Deserialize)]
struct TavilyResponse {
    results: Vec<TavilyResult>,
}

#[derive(serde::Deserialize)]
struct TavilyResult {
    url: String,
    title: Option<String>,
    content: Option<String>,
}

/// Production [`SnippetSearch`] over the Tavily search API.
pub struct TavilySearch {
    api_key: SecretString,
    client: reqwest::Client,
    endpoint: String,
}

impl TavilySearch {
    /// Create a searcher with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            client: reqwest::Client::new(),
            endpoint: TAVILY_ENDPOINT.to_string(),
        }
    }

    /// Point at a different endpoint (proxies, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SnippetSearch for TavilySearch {
    async fn search(&self, query: &str, max_results: usize) -> SearchResult<Vec<Snippet>> {
        let request = TavilyRequest {
            query: query.to_string(),
            search_depth: "basic".to_string(),
            max_results,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose()),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Http(format!("Tavily API error: {}", status)));
        }

        let tavily: TavilyResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Malformed(e.to_string()))?;

        debug!(query = %query, results = tavily.results.len(), "search completed");

        Ok(tavily
            .results
            .into_iter()
            .map(|r| {
                Snippet::new(r.content.unwrap_or_default())
                    .with_title(r.title.unwrap_or_default())
                    .with_url(r.url)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_expected_shape() {
        let request = TavilyRequest {
            query: "the mayor resigned".to_string(),
            search_depth: "basic".to_string(),
            max_results: 5,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["query"], "the mayor resigned");
        assert_eq!(json["search_depth"], "basic");
        assert_eq!(json["max_results"], 5);
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let body = r#"{"results":[{"url":"https://a.com"},{"url":"https://b.com","title":"T","content":"C"}]}"#;
        let parsed: TavilyResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert!(parsed.results[0].content.is_none());
        assert_eq!(parsed.results[1].content.as_deref(), Some("C"));
    }
}
