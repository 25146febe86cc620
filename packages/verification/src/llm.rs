//! Grok-backed language model.
//!
//! Adapts the pure [`xai_client::XaiClient`] to the [`LanguageModel`] seam.
//! Completions run in streaming mode and the stream is drained into one
//! string before returning; the claim parser never sees partial output.

use async_trait::async_trait;
use tracing::debug;

use xai_client::{ChatRequest, Message, XaiClient, XaiError};

use crate::error::{LlmError, LlmResult};
use crate::traits::{CompletionRequest, LanguageModel};

/// Production [`LanguageModel`] over the xAI chat completions API.
pub struct GrokModel {
    client: XaiClient,
    model: String,
}

impl GrokModel {
    /// Create a model adapter over an xAI client.
    pub fn new(client: XaiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl LanguageModel for GrokModel {
    async fn complete(&self, request: CompletionRequest) -> LlmResult<String> {
        let chat = ChatRequest::new(&self.model)
            .message(Message::system(request.system))
            .message(Message::user(request.user))
            .temperature(request.temperature)
            .max_tokens(request.max_tokens);

        let stream = self
            .client
            .chat_completion_stream(chat)
            .await
            .map_err(into_llm_error)?;

        let content = stream.collect_content().await.map_err(into_llm_error)?;
        debug!(model = %self.model, chars = content.len(), "completion collected");

        Ok(content)
    }
}

fn into_llm_error(e: XaiError) -> LlmError {
    match e {
        XaiError::Config(detail) => LlmError::Auth(detail),
        other => LlmError::Completion(other.to_string()),
    }
}
