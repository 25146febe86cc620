//! Claim Extraction and Verification Pipeline
//!
//! Given an article URL, fetch the page, extract candidate factual claims
//! through an LLM, cross-check low-confidence claims against web search,
//! and return a structured verdict with per-claim confidence scores.
//!
//! # Design
//!
//! - One linear pipeline: fetch → extract → verify → aggregate
//! - Failures terminate in a status string, never in a raised error
//! - LLM output is treated as semi-structured: an ordered chain of parser
//!   strategies tolerates prose wrapping, fence wrapping, and a legacy
//!   plain-text format
//! - Claims are immutable value records; verification returns new values
//! - Capabilities enter through traits; configuration enters through one
//!   explicit object, never ambient environment reads
//!
//! # Usage
//!
//! ```rust,ignore
//! use verification::{AnalysisRequest, GrokModel, Pipeline, PipelineConfig, TavilySearch};
//! use xai_client::XaiClient;
//!
//! let config = PipelineConfig::default();
//! let model = GrokModel::new(XaiClient::from_env()?, &config.model);
//! let search = TavilySearch::new(tavily_api_key);
//!
//! let pipeline = Pipeline::new(model, search, config);
//! let result = pipeline.run(AnalysisRequest::new(url)).await;
//! println!("{}: {:.2}", result.status, result.overall_confidence);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Capability seams ([`LanguageModel`], [`SnippetSearch`])
//! - [`types`] - Domain types ([`Claim`], [`AnalysisResult`])
//! - [`fetch`] - Article acquisition and paragraph text extraction
//! - [`extract`] - Prompting, LLM invocation, tolerant parsing
//! - [`verify`] - Evidence gathering for low-confidence claims
//! - [`score`] - Confidence aggregation
//! - [`pipeline`] - Orchestration
//! - [`testing`] - Mock implementations for testing

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod llm;
pub mod pipeline;
pub mod score;
pub mod search;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;
pub mod verify;

// Re-export the core surface at crate root
pub use config::PipelineConfig;
pub use error::{FetchError, LlmError, SearchError};
pub use extract::ClaimExtractor;
pub use fetch::ArticleFetcher;
pub use llm::GrokModel;
pub use pipeline::Pipeline;
pub use score::aggregate_confidence;
pub use search::TavilySearch;
pub use traits::{CompletionRequest, LanguageModel, Snippet, SnippetSearch};
pub use types::{AnalysisRequest, AnalysisResult, Claim, FetchedArticle};
pub use verify::EvidenceVerifier;
