//! Claim extraction: prompt construction, LLM invocation, tolerant parsing.
//!
//! The one stage with two failure modes that matter: a failed LLM *call*
//! (transport, auth, rate limit) is a hard error the orchestrator reports;
//! a response no parser strategy can read degrades to an empty batch and
//! the pipeline continues.

pub mod parse;
pub mod prompts;

use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::error::LlmResult;
use crate::traits::{CompletionRequest, LanguageModel};
use crate::types::Claim;

/// Extracts scored claims from article text through a language model.
pub struct ClaimExtractor<M: LanguageModel> {
    model: M,
    temperature: f32,
    max_tokens: u32,
}

impl<M: LanguageModel> ClaimExtractor<M> {
    /// Create an extractor over a language model.
    pub fn new(model: M, config: &PipelineConfig) -> Self {
        Self {
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Extract claims from (already truncated) article text.
    ///
    /// `Err` means the completion call itself failed. `Ok(vec![])` covers
    /// both an article with nothing to extract and a response no parser
    /// strategy could read; the latter is logged.
    pub async fn extract(&self, article_text: &str) -> LlmResult<Vec<Claim>> {
        let request = CompletionRequest::new(
            prompts::SYSTEM_PROMPT,
            prompts::format_extract_claims(article_text),
        )
        .with_temperature(self.temperature)
        .with_max_tokens(self.max_tokens);

        let content = self.model.complete(request).await?;

        match parse::parse_claims(&content) {
            Some(claims) => {
                debug!(count = claims.len(), "claims extracted");
                Ok(claims)
            }
            None => {
                let preview: String = content.chars().take(200).collect();
                warn!(preview = %preview, "no parser strategy matched LLM output");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::testing::MockLanguageModel;

    #[tokio::test]
    async fn test_extracts_from_valid_json_response() {
        let model = MockLanguageModel::new()
            .with_response(r#"[{"text":"A","confidence":0.9,"explanation":"E"}]"#);
        let extractor = ClaimExtractor::new(model, &PipelineConfig::default());

        let claims = extractor.extract("article text").await.unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].text, "A");
    }

    #[tokio::test]
    async fn test_unparseable_response_degrades_to_empty() {
        let model = MockLanguageModel::new().with_response("not json at all");
        let extractor = ClaimExtractor::new(model, &PipelineConfig::default());

        let claims = extractor.extract("article text").await.unwrap();
        assert!(claims.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let model = MockLanguageModel::new().fail_with("rate limited");
        let extractor = ClaimExtractor::new(model, &PipelineConfig::default());

        let err = extractor.extract("article text").await.unwrap_err();
        assert!(matches!(err, LlmError::Completion(_)));
    }

    #[tokio::test]
    async fn test_request_carries_configured_sampling() {
        let model = MockLanguageModel::new().with_response("[]");
        let config = PipelineConfig::default();
        let extractor = ClaimExtractor::new(model.clone(), &config);

        extractor.extract("the article body").await.unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].temperature, 0.3);
        assert_eq!(calls[0].max_tokens, 1500);
        assert!(calls[0].user.contains("the article body"));
        assert!(calls[0].system.contains("fact-extraction"));
    }
}
