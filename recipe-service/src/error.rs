use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::providers::ProviderError;

/// Message returned to callers for every provider failure.
pub const GENERATION_FAILED_MESSAGE: &str = "Error al generar receta con Gemini";

/// Errors surfaced by the recipe handler.
///
/// Provider faults are not distinguished on the wire: every one becomes the
/// same 500 body.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Recipe generation failed: {0}")]
    Generation(#[from] ProviderError),
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        match self {
            RecipeError::Generation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: GENERATION_FAILED_MESSAGE.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
