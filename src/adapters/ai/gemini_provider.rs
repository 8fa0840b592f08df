//! Gemini Provider - Implementation of AnswerProvider for Google's
//! generative-language API.
//!
//! Issues a single non-streaming `generateContent` call per question, asking
//! for a short, low-temperature completion, and reduces the returned text to
//! one word.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(Some(api_key))
//!     .with_model("gemini-pro")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let provider = GeminiProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{AnswerError, AnswerProvider};

/// Instruction appended to every question so the model answers in one word.
const ONE_WORD_INSTRUCTION: &str = "Provide only a single word answer, nothing else.";

/// Punctuation stripped from the extracted word.
const TRIMMED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication. Absent means the provider fails with
    /// [`AnswerError::NotConfigured`] at call time.
    api_key: Option<Secret<String>>,
    /// Model to use (e.g. "gemini-pro").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given (possibly absent) API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()).map(Secret::new),
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the generateContent endpoint URL with the key as query param.
    fn generate_url(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, api_key
        )
    }

    fn build_request(&self, question: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{question}\n\n{ONE_WORD_INSTRUCTION}"),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                max_output_tokens: 10,
            },
        }
    }
}

#[async_trait]
impl AnswerProvider for GeminiProvider {
    async fn one_word_answer(&self, question: &str) -> Result<String, AnswerError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(AnswerError::NotConfigured)?;

        if question.trim().is_empty() {
            return Err(AnswerError::InvalidQuestion);
        }

        let request = self.build_request(question);

        tracing::debug!(
            model = %self.config.model,
            question_len = question.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.generate_url(api_key.expose_secret()))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnswerError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else {
                    AnswerError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnswerError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnswerError::parse(e.to_string()))?;

        extract_answer(&body)
    }
}

/// Reduces a Gemini response to the single word the API contract promises.
fn extract_answer(response: &GenerateContentResponse) -> Result<String, AnswerError> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .ok_or_else(|| AnswerError::parse("missing answer text in response"))?;

    first_word(text).ok_or_else(|| AnswerError::parse("empty answer text in response"))
}

/// First whitespace-delimited token, trimmed of surrounding punctuation.
fn first_word(text: &str) -> Option<String> {
    let word = text
        .split_whitespace()
        .next()?
        .trim_matches(TRIMMED_PUNCTUATION);

    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_from(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn first_word_takes_leading_token() {
        assert_eq!(first_word("Paris"), Some("Paris".to_string()));
        assert_eq!(first_word("Paris, obviously"), Some("Paris".to_string()));
        assert_eq!(first_word("  Paris.\n"), Some("Paris".to_string()));
    }

    #[test]
    fn first_word_strips_surrounding_punctuation() {
        assert_eq!(first_word("Paris!"), Some("Paris".to_string()));
        assert_eq!(first_word("?Paris?"), Some("Paris".to_string()));
        assert_eq!(first_word("Paris;:"), Some("Paris".to_string()));
    }

    #[test]
    fn first_word_keeps_interior_punctuation() {
        assert_eq!(first_word("3.14 approximately"), Some("3.14".to_string()));
    }

    #[test]
    fn first_word_of_blank_text_is_none() {
        assert_eq!(first_word(""), None);
        assert_eq!(first_word("   \n\t"), None);
        assert_eq!(first_word("?!"), None);
    }

    #[test]
    fn extract_answer_reads_first_candidate_part() {
        let response = response_from(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Blue. " }] }
            }]
        }));
        assert_eq!(extract_answer(&response).unwrap(), "Blue");
    }

    #[test]
    fn extract_answer_fails_without_candidates() {
        let response = response_from(json!({ "candidates": [] }));
        assert!(matches!(
            extract_answer(&response),
            Err(AnswerError::Parse(_))
        ));
    }

    #[test]
    fn extract_answer_fails_without_parts() {
        let response = response_from(json!({
            "candidates": [{ "content": { "parts": [] } }]
        }));
        assert!(matches!(
            extract_answer(&response),
            Err(AnswerError::Parse(_))
        ));
    }

    #[test]
    fn request_serializes_to_gemini_wire_format() {
        let provider = GeminiProvider::new(GeminiConfig::new(Some("k".to_string())));
        let request = provider.build_request("What color is the sky?");
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(
            wire["contents"][0]["parts"][0]["text"],
            json!("What color is the sky?\n\nProvide only a single word answer, nothing else.")
        );
        assert_eq!(wire["generationConfig"]["temperature"], json!(0.1));
        assert_eq!(wire["generationConfig"]["maxOutputTokens"], json!(10));
    }

    #[test]
    fn generate_url_embeds_model_and_key() {
        let config = GeminiConfig::new(Some("secret-key".to_string()))
            .with_base_url("http://localhost:9999/v1beta")
            .with_model("gemini-pro");
        let provider = GeminiProvider::new(config);

        assert_eq!(
            provider.generate_url("secret-key"),
            "http://localhost:9999/v1beta/models/gemini-pro:generateContent?key=secret-key"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_io() {
        let provider = GeminiProvider::new(GeminiConfig::new(None));
        let result = provider.one_word_answer("What color is the sky?").await;
        assert_eq!(result, Err(AnswerError::NotConfigured));

        // The credential check wins regardless of question content.
        let result = provider.one_word_answer("").await;
        assert_eq!(result, Err(AnswerError::NotConfigured));
    }

    #[tokio::test]
    async fn empty_key_counts_as_unconfigured() {
        let provider = GeminiProvider::new(GeminiConfig::new(Some(String::new())));
        let result = provider.one_word_answer("What color is the sky?").await;
        assert_eq!(result, Err(AnswerError::NotConfigured));
    }

    #[tokio::test]
    async fn blank_question_rejected_before_any_io() {
        let provider = GeminiProvider::new(GeminiConfig::new(Some("k".to_string())));
        assert_eq!(
            provider.one_word_answer("").await,
            Err(AnswerError::InvalidQuestion)
        );
        assert_eq!(
            provider.one_word_answer("   ").await,
            Err(AnswerError::InvalidQuestion)
        );
    }
}
