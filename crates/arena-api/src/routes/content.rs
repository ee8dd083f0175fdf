//! Content pack summary.

use arena_content::pack::CategoryIndex;
use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// The loaded pack's fingerprint and its category names.
#[derive(Debug, Serialize)]
pub struct ContentSummary {
    /// Hex SHA-256 of the pack; codes only reproduce against equal packs.
    pub fingerprint: String,
    /// Category names per section.
    pub categories: CategoryIndex,
}

/// GET /api/v1/content
async fn summary(State(state): State<AppState>) -> Json<ContentSummary> {
    Json(ContentSummary {
        fingerprint: state.content_fingerprint.to_string(),
        categories: state.content.categories(),
    })
}

/// Returns the content router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/content", get(summary))
}
