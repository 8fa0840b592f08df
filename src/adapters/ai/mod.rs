//! Answer Provider Adapters.
//!
//! Implementations of the AnswerProvider port.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google generative-language API (gemini-pro)
//! - `MockAnswerProvider` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::MockAnswerProvider;
