//! Language model trait for chat completions.
//!
//! Abstracts the LLM provider behind a single blocking call: the
//! implementation may stream chunks internally, but it must drain them and
//! hand back one completed string. The claim parser never sees partial
//! output.

use async_trait::async_trait;

use crate::error::LlmResult;

/// One chat-completion request: a system instruction fixing the model's
/// role, a user prompt, and a sampling configuration.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction (the model's role).
    pub system: String,

    /// User prompt.
    pub user: String,

    /// Sampling temperature. Low values favor deterministic extraction.
    pub temperature: f32,

    /// Output token budget.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a request with default sampling (temperature 0.3, 1500 tokens).
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: 0.3,
            max_tokens: 1500,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the output token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Chat-completion capability.
///
/// Implementations wrap a specific provider and handle transport,
/// streaming accumulation, and provider-side errors. Unparseable content
/// is NOT an error here: anything the provider successfully returns is
/// passed through for the tolerant parser to deal with.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Run one completion and return the full generated text.
    async fn complete(&self, request: CompletionRequest) -> LlmResult<String>;
}
