//! Capability trait abstractions.
//!
//! The pipeline consumes two external capabilities through traits:
//! a chat-completion LLM ([`llm::LanguageModel`]) and a web search
//! ([`search::SnippetSearch`]). Production implementations live in
//! `crate::llm` and `crate::search`; mocks live in `crate::testing`.

pub mod llm;
pub mod search;

pub use llm::{CompletionRequest, LanguageModel};
pub use search::{Snippet, SnippetSearch};
