//! Pipeline configuration.
//!
//! One explicit value object constructed at startup and handed to the
//! pipeline. Nothing in the pipeline reads the environment; credentials and
//! knobs flow in through this struct so every threshold is visible and
//! testable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for one claim-verification pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Timeout for the article GET request. Default: 10s.
    pub fetch_timeout: Duration,

    /// Maximum characters of extracted article text sent to the LLM.
    ///
    /// A cost/latency control on downstream calls. The cut is a silent
    /// char-boundary truncation, not sentence-aware: claims derived from
    /// the truncated text may cite content past the cut and be
    /// unverifiable. Default: 4000.
    pub max_article_chars: usize,

    /// Model identifier for claim extraction. Default: "grok-3-mini".
    pub model: String,

    /// Sampling temperature for extraction. Low values favor
    /// deterministic, factual extraction. Default: 0.3.
    pub temperature: f32,

    /// Output token budget for extraction. Default: 1500.
    pub max_tokens: u32,

    /// Claims below this confidence get a web-search cross-check; claims
    /// at or above it pass through unverified (search costs money).
    /// Default: 0.5.
    pub verification_threshold: f64,

    /// Confidence boost applied when search snippets corroborate a claim,
    /// clamped at 1.0. A heuristic signal, not a proof. Default: 0.3.
    pub evidence_boost: f64,

    /// Results requested per search query. Default: 5.
    pub search_results: usize,

    /// Snippets actually consumed from the top of each result list.
    /// Default: 3.
    pub snippets_consumed: usize,

    /// Case-insensitive keywords that count as corroboration when found
    /// in a consumed snippet. Approximate and tunable. Default:
    /// ["confirm", "true"].
    pub corroboration_keywords: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            max_article_chars: 4000,
            model: "grok-3-mini".to_string(),
            temperature: 0.3,
            max_tokens: 1500,
            verification_threshold: 0.5,
            evidence_boost: 0.3,
            search_results: 5,
            snippets_consumed: 3,
            corroboration_keywords: vec!["confirm".to_string(), "true".to_string()],
        }
    }
}

impl PipelineConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the article length cap.
    pub fn with_max_article_chars(mut self, max: usize) -> Self {
        self.max_article_chars = max;
        self
    }

    /// Set the extraction model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the verification threshold.
    pub fn with_verification_threshold(mut self, threshold: f64) -> Self {
        self.verification_threshold = threshold;
        self
    }

    /// Set the evidence boost.
    pub fn with_evidence_boost(mut self, boost: f64) -> Self {
        self.evidence_boost = boost;
        self
    }

    /// Set the corroboration keywords.
    pub fn with_corroboration_keywords(
        mut self,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.corroboration_keywords = keywords.into_iter().map(|k| k.into()).collect();
        self
    }
}
