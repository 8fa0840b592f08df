//! HTTP handlers for the operation and health endpoints.
//!
//! These handlers connect Axum routes to the application layer dispatcher.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use crate::application::{EvaluateError, EvaluateOperationHandler};
use crate::domain::{Operation, RequestError};

use super::dto::ResponseEnvelope;

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// API error that implements IntoResponse.
///
/// Every domain error renders as 400 with the error's message, matching the
/// service's published contract; only unexpected failures become 500.
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, envelope) = match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ResponseEnvelope::failure(message))
            }
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseEnvelope::failure(format!("Internal server error: {message}")),
            ),
        };
        (status, Json(envelope)).into_response()
    }
}

impl From<RequestError> for ApiError {
    fn from(error: RequestError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<EvaluateError> for ApiError {
    fn from(error: EvaluateError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub evaluate: Arc<EvaluateOperationHandler>,
    pub official_email: String,
}

impl AppState {
    pub fn new(evaluate: Arc<EvaluateOperationHandler>, official_email: impl Into<String>) -> Self {
        Self {
            evaluate,
            official_email: official_email.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /bfhl
///
/// Evaluates the single operation named by the request body.
///
/// The body is read as raw bytes and parsed leniently: an unreadable or
/// non-JSON body is a 400 with a stable message, not a framework rejection.
pub async fn evaluate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON or empty request body".to_string()))?;

    let operation = Operation::from_json(&value)?;

    tracing::debug!(operation = operation.name(), "Evaluating request");

    let data = state.evaluate.handle(operation).await?;

    Ok(Json(ResponseEnvelope::success(&state.official_email, data)))
}

/// GET /health
///
/// Liveness check; always succeeds and reports the contact identity.
pub async fn health(State(state): State<AppState>) -> Json<ResponseEnvelope> {
    Json(ResponseEnvelope::ok(&state.official_email))
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<ResponseEnvelope>) {
    (
        StatusCode::NOT_FOUND,
        Json(ResponseEnvelope::failure("Endpoint not found")),
    )
}
