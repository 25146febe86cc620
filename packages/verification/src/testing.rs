//! Testing utilities including mock implementations.
//!
//! Mocks for both capability seams, with call tracking so tests can assert
//! not only what was returned but what was (or was not) invoked — e.g. that
//! search never runs for an already-confident claim.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{LlmError, LlmResult, SearchError, SearchResult};
use crate::traits::{CompletionRequest, LanguageModel, Snippet, SnippetSearch};

/// Record of a completion request made to [`MockLanguageModel`].
#[derive(Debug, Clone)]
pub struct MockLlmCall {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A mock language model returning a scripted response.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the pipeline owns another.
#[derive(Clone, Default)]
pub struct MockLanguageModel {
    /// Scripted response content. Defaults to an empty JSON array.
    response: Arc<RwLock<Option<String>>>,

    /// When set, every call fails with this transport error.
    failure: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions.
    calls: Arc<RwLock<Vec<MockLlmCall>>>,
}

impl MockLanguageModel {
    /// Create a mock that answers every completion with `"[]"`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the completion content.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        *self.response.write().unwrap() = Some(content.into());
        self
    }

    /// Make every completion fail at the transport level.
    pub fn fail_with(self, detail: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(detail.into());
        self
    }

    /// Get all completion calls made to this mock.
    pub fn calls(&self) -> Vec<MockLlmCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn complete(&self, request: CompletionRequest) -> LlmResult<String> {
        self.calls.write().unwrap().push(MockLlmCall {
            system: request.system,
            user: request.user,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        });

        if let Some(detail) = self.failure.read().unwrap().clone() {
            return Err(LlmError::Completion(detail));
        }

        Ok(self
            .response
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "[]".to_string()))
    }
}

/// Record of a search call made to [`MockSnippetSearch`].
#[derive(Debug, Clone)]
pub struct MockSearchCall {
    pub query: String,
    pub max_results: usize,
}

/// A mock snippet search with per-query scripted results.
///
/// Unknown queries return no snippets. Clones share state.
#[derive(Clone, Default)]
pub struct MockSnippetSearch {
    /// Scripted snippets by query.
    results: Arc<RwLock<HashMap<String, Vec<Snippet>>>>,

    /// Queries that should fail.
    fail_queries: Arc<RwLock<Vec<String>>>,

    /// Call tracking for assertions.
    calls: Arc<RwLock<Vec<MockSearchCall>>>,
}

impl MockSnippetSearch {
    /// Create a mock that returns no snippets for any query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script full snippets for a query.
    pub fn with_snippets(self, query: impl Into<String>, snippets: Vec<Snippet>) -> Self {
        self.results.write().unwrap().insert(query.into(), snippets);
        self
    }

    /// Script text-only snippets for a query.
    pub fn with_snippet_texts(self, query: impl Into<String>, texts: &[&str]) -> Self {
        let snippets = texts.iter().map(|t| Snippet::new(*t)).collect();
        self.with_snippets(query, snippets)
    }

    /// Mark a query as failing.
    pub fn fail_query(self, query: impl Into<String>) -> Self {
        self.fail_queries.write().unwrap().push(query.into());
        self
    }

    /// Get all search calls made to this mock.
    pub fn calls(&self) -> Vec<MockSearchCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl SnippetSearch for MockSnippetSearch {
    async fn search(&self, query: &str, max_results: usize) -> SearchResult<Vec<Snippet>> {
        self.calls.write().unwrap().push(MockSearchCall {
            query: query.to_string(),
            max_results,
        });

        if self
            .fail_queries
            .read()
            .unwrap()
            .contains(&query.to_string())
        {
            return Err(SearchError::Transport("mock search failure".to_string()));
        }

        let mut snippets = self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();
        snippets.truncate(max_results);
        Ok(snippets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_llm_default_response() {
        let model = MockLanguageModel::new();
        let content = model
            .complete(CompletionRequest::new("s", "u"))
            .await
            .unwrap();
        assert_eq!(content, "[]");
        assert_eq!(model.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_llm_failure() {
        let model = MockLanguageModel::new().fail_with("boom");
        let err = model
            .complete(CompletionRequest::new("s", "u"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Completion(_)));
    }

    #[tokio::test]
    async fn test_mock_search_scripted_and_tracked() {
        let search = MockSnippetSearch::new().with_snippet_texts("q", &["a", "b"]);

        let snippets = search.search("q", 5).await.unwrap();
        assert_eq!(snippets.len(), 2);

        let calls = search.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].query, "q");
        assert_eq!(calls[0].max_results, 5);
    }

    #[tokio::test]
    async fn test_mock_search_respects_max_results() {
        let search = MockSnippetSearch::new().with_snippet_texts("q", &["a", "b", "c"]);
        let snippets = search.search("q", 2).await.unwrap();
        assert_eq!(snippets.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_search_fail_query() {
        let search = MockSnippetSearch::new().fail_query("q");
        assert!(search.search("q", 5).await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_call_log() {
        let search = MockSnippetSearch::new();
        let clone = search.clone();
        clone.search("q", 1).await.unwrap();
        assert_eq!(search.calls().len(), 1);
    }
}
