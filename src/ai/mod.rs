//! All AI/LLM functionality

pub mod client;

// Re-export main types for convenience
pub use client::{LlmClient, estimate_tokens};

use async_trait::async_trait;

use crate::errors::SummarizeError;

/// The summarization capability the service consumes.
///
/// Decoding is expected to be deterministic: the same input and word
/// bounds always yield the same summary. Implementations may take
/// several seconds per call; the handler awaits the full result.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produces a summary of `text` between `min_words` and `max_words`
    /// whitespace-delimited words.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or does not
    /// return a usable summary. Callers do not distinguish failure kinds.
    async fn summarize(
        &self,
        text: &str,
        max_words: usize,
        min_words: usize,
    ) -> Result<String, SummarizeError>;
}
