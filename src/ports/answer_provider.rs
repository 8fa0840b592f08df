//! Answer Provider Port - Interface for the outbound one-word answer service.
//!
//! This port abstracts the single external dependency of the service: a
//! generative-language API asked for a one-word answer to a free-text
//! question. The HTTP layer and dispatcher depend only on this trait, so
//! tests can swap in a mock and the provider can change without touching
//! the rest of the crate.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedAnswerer;
//!
//! #[async_trait]
//! impl AnswerProvider for CannedAnswerer {
//!     async fn one_word_answer(&self, _question: &str) -> Result<String, AnswerError> {
//!         Ok("Paris".to_string())
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// Port for the outbound question-answering service.
///
/// Implementations issue exactly one attempt per invocation; retries are the
/// caller's decision, and this service makes none.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Answers `question` with a single word.
    ///
    /// The returned string is the first whitespace-delimited token of the
    /// upstream completion, trimmed of surrounding punctuation.
    async fn one_word_answer(&self, question: &str) -> Result<String, AnswerError>;
}

/// Answer provider errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// No API credential is configured.
    #[error("AI provider API key not configured")]
    NotConfigured,

    /// The question is empty or whitespace-only.
    #[error("AI question cannot be empty")]
    InvalidQuestion,

    /// The upstream call did not complete within the configured timeout.
    #[error("AI API timeout after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The upstream returned a non-2xx status.
    #[error("AI API error: {status}")]
    UpstreamStatus { status: u16 },

    /// The upstream response body lacked the expected text field.
    #[error("AI API response parsing error: {0}")]
    Parse(String),

    /// Transport-level failure before any response arrived.
    #[error("AI API connection error: {0}")]
    Network(String),
}

impl AnswerError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        AnswerError::Parse(message.into())
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        AnswerError::Network(message.into())
    }
}
