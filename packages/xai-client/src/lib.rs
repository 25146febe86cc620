//! Pure xAI REST API client
//!
//! A clean, minimal client for the xAI API with no domain-specific logic.
//! The API is OpenAI-compatible; this client covers chat completions in both
//! blocking and streaming (SSE) form.
//!
//! # Example
//!
//! ```rust,ignore
//! use xai_client::{XaiClient, ChatRequest, Message};
//!
//! let client = XaiClient::from_env()?;
//!
//! // Chat completion
//! let response = client.chat_completion(ChatRequest {
//!     model: "grok-3-mini".into(),
//!     messages: vec![Message::user("Hello!")],
//!     ..Default::default()
//! }).await?;
//!
//! // Streaming, accumulated into one string
//! let request = ChatRequest::new("grok-3-mini").message(Message::user("Hello!"));
//! let content = client.chat_completion_stream(request).await?.collect_content().await?;
//! ```

pub mod error;
pub mod streaming;
pub mod types;

pub use error::{Result, XaiError};
pub use streaming::{ChatCompletionStream, StreamChunk};
pub use types::*;

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";

/// Reasoning models can hold a completion open for minutes, so the default
/// per-request timeout is generous.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Pure xAI API client.
#[derive(Clone)]
pub struct XaiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    request_timeout: Duration,
}

impl XaiClient {
    /// Create a new xAI client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create from environment variable `XAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("XAI_API_KEY")
            .map_err(|_| XaiError::Config("XAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or compatible endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completion API and get a response.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.request_timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "xAI request failed");
                XaiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "xAI API error");
            return Err(XaiError::Api(format!("xAI API error: {}", error_text)));
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| XaiError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| XaiError::Api("No response from xAI".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "xAI chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }

    /// Streaming chat completion.
    ///
    /// Send messages and get a stream of token chunks back, via SSE
    /// (server-sent events). Use [`ChatCompletionStream::collect_content`]
    /// to accumulate the whole completion.
    pub async fn chat_completion_stream(&self, request: ChatRequest) -> Result<ChatCompletionStream> {
        let request = ChatRequest {
            stream: Some(true),
            ..request
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.request_timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "xAI streaming request failed");
                XaiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "xAI streaming API error");
            return Err(XaiError::Api(format!(
                "xAI streaming API error: {}",
                error_text
            )));
        }

        Ok(ChatCompletionStream::new(response.bytes_stream()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = XaiClient::new("xai-test")
            .with_base_url("https://custom.api.com")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(client.api_key, "xai-test");
        assert_eq!(client.base_url, "https://custom.api.com");
        assert_eq!(client.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_default_base_url() {
        let client = XaiClient::new("xai-test");
        assert_eq!(client.base_url(), "https://api.x.ai/v1");
    }
}
