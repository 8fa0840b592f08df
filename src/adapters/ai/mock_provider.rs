//! Mock Answer Provider for testing.
//!
//! Provides a configurable mock implementation of the AnswerProvider port,
//! allowing tests to run without calling the real Gemini API.
//!
//! # Features
//!
//! - Pre-configured answers and errors, consumed in order
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAnswerProvider::new().with_answer("Paris");
//!
//! let word = provider.one_word_answer("Capital of France?").await?;
//! assert_eq!(word, "Paris");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AnswerError, AnswerProvider};

/// Mock answer provider for testing.
///
/// Configured responses are consumed front-to-back; once the queue is empty
/// the provider fails with [`AnswerError::NotConfigured`], which keeps an
/// unconfigured mock behaving like a service without a credential.
#[derive(Debug, Clone, Default)]
pub struct MockAnswerProvider {
    responses: Arc<Mutex<VecDeque<Result<String, AnswerError>>>>,
    questions: Arc<Mutex<Vec<String>>>,
}

impl MockAnswerProvider {
    /// Creates a new mock provider with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful one-word answer.
    pub fn with_answer(self, word: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(word.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: AnswerError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the questions asked so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerProvider for MockAnswerProvider {
    async fn one_word_answer(&self, question: &str) -> Result<String, AnswerError> {
        self.questions.lock().unwrap().push(question.to_string());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AnswerError::NotConfigured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_answers_in_order() {
        let provider = MockAnswerProvider::new()
            .with_answer("Paris")
            .with_answer("Blue");

        assert_eq!(provider.one_word_answer("q1").await.unwrap(), "Paris");
        assert_eq!(provider.one_word_answer("q2").await.unwrap(), "Blue");
    }

    #[tokio::test]
    async fn returns_queued_errors() {
        let provider =
            MockAnswerProvider::new().with_error(AnswerError::UpstreamStatus { status: 500 });

        assert_eq!(
            provider.one_word_answer("q").await,
            Err(AnswerError::UpstreamStatus { status: 500 })
        );
    }

    #[tokio::test]
    async fn empty_queue_acts_unconfigured() {
        let provider = MockAnswerProvider::new();
        assert_eq!(
            provider.one_word_answer("q").await,
            Err(AnswerError::NotConfigured)
        );
    }

    #[tokio::test]
    async fn records_questions_asked() {
        let provider = MockAnswerProvider::new().with_answer("Yes").with_answer("No");
        provider.one_word_answer("first?").await.unwrap();
        provider.one_word_answer("second?").await.unwrap();

        assert_eq!(provider.questions(), vec!["first?", "second?"]);
    }
}
