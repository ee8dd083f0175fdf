//! Integration tests for minting and loading game codes.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_list_games_returns_every_game() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(app, "/api/v1/games").await;

    assert_eq!(status, StatusCode::OK);
    let games = json["games"].as_array().unwrap();
    assert_eq!(games.len(), 8);
    assert_eq!(games[0], "codenames");
    assert!(games.contains(&json!("picture-quiz")));
}

#[tokio::test]
async fn test_create_codenames_code_uses_seed_source() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/games/codenames/codes",
        &json!({ "teams": 2, "category": "colors" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], "2-colors-skill-issue");
    assert_eq!(json["seed"], common::FIXED_SEED);
    assert_eq!(json["slug"], "skill-issue");
}

#[tokio::test]
async fn test_minted_code_loads_a_full_board() {
    let (_, created) = common::post_json(
        common::build_test_app(),
        "/api/v1/games/codenames/codes",
        &json!({ "teams": 3, "category": "colors" }),
    )
    .await;
    let code = created["code"].as_str().unwrap();

    let (status, json) =
        common::get_json(common::build_test_app(), &format!("/api/v1/games/codenames/{code}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], code);
    assert_eq!(json["seed"], common::FIXED_SEED);
    assert_eq!(json["config"]["teams"], 3);
    assert_eq!(json["state"]["cards"].as_array().unwrap().len(), 25);
    assert!(json["content_fingerprint"].is_string());
}

#[tokio::test]
async fn test_loading_the_same_code_twice_is_identical() {
    let uri = "/api/v1/games/codenames/2-random-gg-ez";

    let (first_status, first) = common::get_json(common::build_test_app(), uri).await;
    let (_, second) = common::get_json(common::build_test_app(), uri).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fingerprint_matches_content_endpoint() {
    let (_, content) = common::get_json(common::build_test_app(), "/api/v1/content").await;
    let (_, game) = common::get_json(
        common::build_test_app(),
        "/api/v1/games/never-have-i-ever/3-classic-you-are-gay",
    )
    .await;

    assert_eq!(game["content_fingerprint"], content["fingerprint"]);
    assert_eq!(game["state"]["prompts"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_mafia_code_without_category_loads() {
    let (status, json) =
        common::get_json(common::build_test_app(), "/api/v1/games/mafia/7-2-1-0-touch-grass").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["config"]["players"], 7);
    assert_eq!(json["config"]["doctor"], true);
    assert_eq!(json["config"]["detective"], false);
    assert_eq!(json["state"]["roles"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_out_of_range_config_returns_400() {
    let (status, json) = common::post_json(
        common::build_test_app(),
        "/api/v1/games/codenames/codes",
        &json!({ "teams": 9, "category": "colors" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_game_code");
}

#[tokio::test]
async fn test_imposter_majority_returns_400() {
    let (status, json) = common::post_json(
        common::build_test_app(),
        "/api/v1/games/imposter/codes",
        &json!({ "players": 4, "imposters": 2, "category": "colors" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_game_code");
}

#[tokio::test]
async fn test_unknown_category_returns_400() {
    let (status, json) = common::post_json(
        common::build_test_app(),
        "/api/v1/games/codenames/codes",
        &json!({ "teams": 2, "category": "dinosaurs" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "unknown_category");
}

#[tokio::test]
async fn test_small_category_returns_422() {
    let (status, json) = common::post_json(
        common::build_test_app(),
        "/api/v1/games/codenames/codes",
        &json!({ "teams": 2, "category": "tiny" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "insufficient_content");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let (status, _) = common::post_json(
        common::build_test_app(),
        "/api/v1/games/codenames/codes",
        &json!({ "teams": "two" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_code_with_unknown_slug_returns_400() {
    let (status, json) = common::get_json(
        common::build_test_app(),
        "/api/v1/games/codenames/2-colors-not-a-slug",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_game_code");
}

#[tokio::test]
async fn test_code_for_another_game_returns_400() {
    let (status, json) = common::get_json(
        common::build_test_app(),
        "/api/v1/games/mafia/2-colors-gg-ez",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_game_code");
}
