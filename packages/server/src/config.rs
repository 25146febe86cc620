//! Server configuration loaded from environment variables.
//!
//! The only place the environment is read. Everything downstream receives
//! explicit values.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use verification::PipelineConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub xai_api_key: String,
    pub tavily_api_key: String,
    pub model: String,
    /// Per-request LLM timeout. Reasoning models can be slow, so the
    /// default is generous; override with `XAI_TIMEOUT_SECS`.
    pub llm_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            xai_api_key: env::var("XAI_API_KEY").context("XAI_API_KEY must be set")?,
            tavily_api_key: env::var("TAVILY_API_KEY").context("TAVILY_API_KEY must be set")?,
            model: env::var("XAI_MODEL").unwrap_or_else(|_| "grok-3-mini".to_string()),
            llm_timeout: Duration::from_secs(
                env::var("XAI_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "600".to_string())
                    .parse()
                    .context("XAI_TIMEOUT_SECS must be a valid number")?,
            ),
        })
    }

    /// Pipeline configuration derived from server settings.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default().with_model(&self.model)
    }
}
