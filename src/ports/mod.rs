//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnswerProvider` - Port for the outbound one-word answer service

mod answer_provider;

pub use answer_provider::{AnswerError, AnswerProvider};
