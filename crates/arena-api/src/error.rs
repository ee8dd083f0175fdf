//! Arena API: error types.

use arena_content::ContentError;
use arena_core::error::DomainError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The content pack could not be loaded.
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// A domain failure from decoding or setting up a game.
    Domain(DomainError),
    /// A bare slug lookup missed the dictionary.
    UnknownSlug(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::Domain(err) => {
                let (status, code) = match &err {
                    DomainError::InvalidGameCode(_) => (StatusCode::BAD_REQUEST, "invalid_game_code"),
                    DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                    DomainError::UnknownCategory(_) => (StatusCode::BAD_REQUEST, "unknown_category"),
                    DomainError::InsufficientContent { .. } => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_content")
                    }
                };
                (status, code, err.to_string())
            }
            ApiError::UnknownSlug(slug) => (
                StatusCode::NOT_FOUND,
                "unknown_slug",
                format!("unknown slug {slug:?}"),
            ),
        };

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::error::CodeError;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        let response = err.into().into_response();
        response.status()
    }

    #[test]
    fn test_invalid_game_code_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InvalidGameCode(CodeError::Empty)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unknown_category_maps_to_400() {
        assert_eq!(
            status_of(DomainError::UnknownCategory("dinosaurs".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_insufficient_content_maps_to_422() {
        assert_eq!(
            status_of(DomainError::InsufficientContent {
                pool: "words/tiny".into(),
                needed: 25,
                available: 3,
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_unknown_slug_maps_to_404() {
        assert_eq!(
            status_of(ApiError::UnknownSlug("ZZZZ".into())),
            StatusCode::NOT_FOUND
        );
    }
}
