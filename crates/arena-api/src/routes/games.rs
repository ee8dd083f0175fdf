//! Game endpoints, one nested router per [`GameMode`].

use arena_core::slug::Seed;
use arena_games::{
    Charades, Codenames, GAME_IDS, GameMode, Imposter, Mafia, NeverHaveIEver, PictureQuiz, Sketch,
    TruthOrDare, create_game_code, start_game,
};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Response for a freshly minted code.
#[derive(Debug, Serialize)]
pub struct CreatedCode {
    /// The shareable game code.
    pub code: String,
    /// Seed embedded in the code.
    pub seed: Seed,
    /// Slug embedded in the code.
    pub slug: &'static str,
}

/// A game rebuilt from its code.
#[derive(Debug, Serialize)]
pub struct GameResponse<C, S> {
    /// The requested code.
    pub code: String,
    /// Decoded seed.
    pub seed: Seed,
    /// Decoded config.
    pub config: C,
    /// Generated state.
    pub state: S,
    /// Fingerprint of the pack the state was built from.
    pub content_fingerprint: String,
}

/// Game listing.
#[derive(Debug, Serialize)]
pub struct GameList {
    /// Game identifiers, in menu order.
    pub games: &'static [&'static str],
}

/// GET /api/v1/games
async fn list_games() -> Json<GameList> {
    Json(GameList { games: &GAME_IDS })
}

/// POST /api/v1/games/{game}/codes
#[instrument(skip(state, config), fields(game = G::ID))]
async fn create_code<G: GameMode + Send + Sync + 'static>(
    State(state): State<AppState>,
    Json(config): Json<G::Config>,
) -> Result<Json<CreatedCode>, ApiError> {
    let correlation_id = Uuid::new_v4();
    let seed = state.seed_source.next_seed();
    info!(%correlation_id, seed = seed.value(), "minting game code");

    let code = create_game_code::<G>(&config, seed, &state.content)?;
    Ok(Json(CreatedCode {
        code,
        seed,
        slug: seed.slug(),
    }))
}

/// GET /api/v1/games/{game}/{code}
#[instrument(skip(state), fields(game = G::ID))]
async fn load_game<G: GameMode + Send + Sync + 'static>(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<GameResponse<G::Config, G::State>>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "loading game");

    let game = start_game::<G>(&code, &state.content)?;
    Ok(Json(GameResponse {
        code: game.code,
        seed: game.seed,
        config: game.config,
        state: game.state,
        content_fingerprint: state.content_fingerprint.to_string(),
    }))
}

fn game_router<G: GameMode + Send + Sync + 'static>() -> Router<AppState> {
    let inner = Router::new()
        .route("/codes", post(create_code::<G>))
        .route("/{code}", get(load_game::<G>));
    Router::new().nest(&format!("/api/v1/games/{}", G::ID), inner)
}

/// Returns the router for every game.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/games", get(list_games))
        .merge(game_router::<Codenames>())
        .merge(game_router::<Imposter>())
        .merge(game_router::<TruthOrDare>())
        .merge(game_router::<NeverHaveIEver>())
        .merge(game_router::<Charades>())
        .merge(game_router::<Mafia>())
        .merge(game_router::<Sketch>())
        .merge(game_router::<PictureQuiz>())
}
