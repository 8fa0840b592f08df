//! HTTP adapter - REST API implementation.

mod dto;
mod handlers;
mod routes;

pub use dto::ResponseEnvelope;
pub use handlers::{ApiError, AppState};
pub use routes::router;
