//! HTTP routes and middleware assembly.

use std::time::Duration;

use axum::http::{HeaderValue, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::dto::ResponseEnvelope;
use super::handlers::{evaluate, health, not_found, AppState};

/// Creates the API router with all routes and middleware.
pub fn router(state: AppState, server: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/bfhl", post(evaluate))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
        .layer(map_response(shape_method_not_allowed))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )));

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if !origins.is_empty() {
        router = router.layer(CorsLayer::new().allow_origin(AllowOrigin::list(origins)));
    }

    router
}

/// Rewrites the framework's bare 405 into the uniform JSON envelope.
async fn shape_method_not_allowed(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ResponseEnvelope::failure("Method not allowed")),
        )
            .into_response();
    }
    response
}
