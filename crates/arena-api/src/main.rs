//! Arena API server entry point.

use std::sync::Arc;

use arena_api::config::ServerConfig;
use arena_api::error::AppError;
use arena_api::state::AppState;
use arena_core::slug::ThreadRngSeedSource;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Arena API server");

    let config = ServerConfig::from_env()?;
    let content = config.load_content()?;

    let app_state = AppState::new(content, Arc::new(ThreadRngSeedSource));
    tracing::info!(fingerprint = %app_state.content_fingerprint, "content pack ready");

    let app = arena_api::build_router(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
