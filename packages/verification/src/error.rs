//! Typed errors for the verification library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. The pipeline orchestrator
//! absorbs all of these into a status string; nothing here crosses the
//! request boundary as a raised error.

use thiserror::Error;

/// Errors that can occur while fetching article content.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Connection, TLS, or timeout failure
    #[error("request failed: {0}")]
    Transport(String),

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Errors from the language model capability.
///
/// Only transport-level failures live here (auth, network, rate limit,
/// provider-side errors). Unparseable model output is NOT an error: the
/// tolerant parser degrades it to an empty claim batch.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The completion call itself failed
    #[error("completion failed: {0}")]
    Completion(String),

    /// Missing or rejected credentials
    #[error("auth error: {0}")]
    Auth(String),
}

/// Errors from the snippet search capability.
///
/// Always per-claim: a failed search annotates one claim and never aborts
/// the rest of the batch.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Server answered with a non-2xx status
    #[error("search API error: {0}")]
    Http(String),

    /// Connection or timeout failure
    #[error("search request failed: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("malformed search response: {0}")]
    Malformed(String),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for language model operations.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Result type alias for search operations.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
