//! Request model: the one operation a request body selects.
//!
//! The wire format is a JSON object with exactly one key drawn from a fixed
//! set. Rather than threading an untyped map through the service, the body is
//! decoded up front into an [`Operation`] variant; everything past this point
//! works with typed values.

use serde_json::Value;
use thiserror::Error;

/// The keys a request body may carry, in documentation order.
pub const ALLOWED_KEYS: [&str; 5] = ["fibonacci", "prime", "lcm", "hcf", "AI"];

/// A validated, typed request.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Generate the first n Fibonacci terms.
    Fibonacci(u64),
    /// Keep the prime elements of a sequence.
    FilterPrimes(Vec<i64>),
    /// Highest common factor of a sequence.
    Hcf(Vec<i64>),
    /// Least common multiple of a sequence.
    Lcm(Vec<i64>),
    /// Ask the AI bridge for a one-word answer.
    Ask(String),
}

/// Failures while decoding a request body into an [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Request body is empty")]
    EmptyBody,

    #[error("Request must contain exactly one key")]
    WrongKeyCount { count: usize },

    #[error("Invalid key '{key}'. Must be one of: fibonacci, prime, lcm, hcf, AI")]
    UnknownKey { key: String },

    #[error("{0}")]
    InvalidArgument(String),
}

impl Operation {
    /// Decodes a parsed JSON value into an operation.
    ///
    /// The value must be an object with exactly one key from [`ALLOWED_KEYS`];
    /// an empty object is treated the same as a missing body.
    pub fn from_json(value: &Value) -> Result<Self, RequestError> {
        let map = value.as_object().ok_or(RequestError::EmptyBody)?;

        if map.is_empty() {
            return Err(RequestError::EmptyBody);
        }
        if map.len() != 1 {
            return Err(RequestError::WrongKeyCount { count: map.len() });
        }

        let (key, value) = map.iter().next().expect("map has exactly one entry");

        match key.as_str() {
            "fibonacci" => Ok(Operation::Fibonacci(decode_count(value)?)),
            "prime" => Ok(Operation::FilterPrimes(decode_integers("prime", value)?)),
            "lcm" => Ok(Operation::Lcm(decode_integers("lcm", value)?)),
            "hcf" => Ok(Operation::Hcf(decode_integers("hcf", value)?)),
            "AI" => Ok(Operation::Ask(decode_question(value)?)),
            other => Err(RequestError::UnknownKey {
                key: other.to_string(),
            }),
        }
    }

    /// Short name of the selected operation, for tracing.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Fibonacci(_) => "fibonacci",
            Operation::FilterPrimes(_) => "prime",
            Operation::Hcf(_) => "hcf",
            Operation::Lcm(_) => "lcm",
            Operation::Ask(_) => "AI",
        }
    }
}

fn decode_count(value: &Value) -> Result<u64, RequestError> {
    value.as_u64().ok_or_else(|| {
        RequestError::InvalidArgument(
            "fibonacci input must be a non-negative integer".to_string(),
        )
    })
}

fn decode_integers(key: &str, value: &Value) -> Result<Vec<i64>, RequestError> {
    let items = value.as_array().ok_or_else(|| {
        RequestError::InvalidArgument(format!("{key} input must be an array of integers"))
    })?;

    items
        .iter()
        .map(|item| {
            item.as_i64().ok_or_else(|| {
                RequestError::InvalidArgument(format!(
                    "{key} input must be an array of integers"
                ))
            })
        })
        .collect()
}

fn decode_question(value: &Value) -> Result<String, RequestError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| RequestError::InvalidArgument("AI input must be a string".to_string()))
}
