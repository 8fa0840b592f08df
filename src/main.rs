//! Service entrypoint: load configuration, wire the provider, serve.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use bfhl_api::adapters::ai::{GeminiConfig, GeminiProvider};
use bfhl_api::adapters::http::{router, AppState};
use bfhl_api::application::EvaluateOperationHandler;
use bfhl_api::config::AppConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::load()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {e}")))?;
    config
        .validate()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    // RUST_LOG overrides the configured filter when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !config.ai.has_key() {
        tracing::warn!("Gemini API key not configured; AI requests will be rejected");
    }

    let gemini = GeminiConfig::new(config.ai.gemini_api_key.clone())
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout());
    let provider = Arc::new(GeminiProvider::new(gemini));

    let evaluate = Arc::new(EvaluateOperationHandler::new(provider));
    let state = AppState::new(evaluate, config.contact.official_email.clone());
    let app = router(state, &config.server);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind listener to {}: {}", addr, e);
        e
    })?;
    tracing::info!(%addr, "bfhl-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
