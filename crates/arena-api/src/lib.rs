//! Arena API: mints game codes and rebuilds game state from them.
//!
//! The service is stateless apart from the loaded content pack: every
//! request that loads a game decodes the slug and replays the setup.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::slugs::router())
        .merge(routes::content::router())
        .merge(routes::games::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
