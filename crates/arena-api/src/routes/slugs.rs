//! Slug and seed lookups.

use arena_core::slug::{self, Seed};
use axum::extract::Path;
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// A seed and its slug.
#[derive(Debug, Serialize)]
pub struct SlugResponse {
    /// Seed in `[0, 50)`.
    pub seed: Seed,
    /// Dictionary entry for `seed`.
    pub slug: &'static str,
}

impl From<Seed> for SlugResponse {
    fn from(seed: Seed) -> Self {
        Self {
            seed,
            slug: seed.slug(),
        }
    }
}

/// GET /api/v1/slugs/{slug}
#[instrument(skip_all, fields(slug = %raw))]
async fn decode_slug(Path(raw): Path<String>) -> Result<Json<SlugResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "decoding slug");

    slug::decode(&raw)
        .map(|seed| Json(SlugResponse::from(seed)))
        .ok_or(ApiError::UnknownSlug(raw))
}

/// GET /api/v1/seeds/{seed}
///
/// Any integer is accepted and reduced modulo the dictionary size.
async fn encode_seed(Path(index): Path<i64>) -> Json<SlugResponse> {
    Json(SlugResponse::from(Seed::from_index(index)))
}

/// Returns the slug lookup router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/slugs/{slug}", get(decode_slug))
        .route("/api/v1/seeds/{seed}", get(encode_seed))
}
