//! Evaluate handler - dispatches a validated operation to its kernel.
//!
//! This is the only place that knows which [`Operation`] variant maps to
//! which numeric kernel or port call. The mapping is static and total over
//! the variant set; adding an operation means adding a variant and an arm.

use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::numeric::{fibonacci, filter_primes, hcf, lcm, NumericError};
use crate::domain::Operation;
use crate::ports::{AnswerError, AnswerProvider};

/// Errors surfaced while evaluating an operation.
///
/// Both sources are domain errors for response purposes; the HTTP layer
/// renders either as a failure envelope with the error's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// Dispatches operations to kernels and the answer provider.
pub struct EvaluateOperationHandler {
    answer_provider: Arc<dyn AnswerProvider>,
}

impl EvaluateOperationHandler {
    pub fn new(answer_provider: Arc<dyn AnswerProvider>) -> Self {
        Self { answer_provider }
    }

    /// Evaluates one operation to its JSON-ready result.
    pub async fn handle(&self, operation: Operation) -> Result<Value, EvaluateError> {
        let result = match operation {
            Operation::Fibonacci(n) => json!(fibonacci(n)?),
            Operation::FilterPrimes(numbers) => json!(filter_primes(&numbers)?),
            Operation::Hcf(numbers) => json!(hcf(&numbers)?),
            Operation::Lcm(numbers) => json!(lcm(&numbers)?),
            Operation::Ask(question) => {
                json!(self.answer_provider.one_word_answer(&question).await?)
            }
        };

        Ok(result)
    }
}
