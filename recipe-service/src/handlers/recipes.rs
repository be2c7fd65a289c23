use axum::{extract::State, Json};

use crate::error::RecipeError;
use crate::models::{RecipeRequest, RecipeResponse};
use crate::services::build_recipe_prompt;
use crate::startup::AppState;

/// `POST /generar-receta`: ask the text provider for a recipe using the
/// caller's ingredients and return its text untouched.
#[tracing::instrument(name = "generate_recipe", skip_all)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(payload): Json<RecipeRequest>,
) -> Result<Json<RecipeResponse>, RecipeError> {
    let prompt = build_recipe_prompt(&payload.ingredients_text());

    let response = state.text_provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Error con Gemini");
        RecipeError::from(e)
    })?;

    tracing::debug!(
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish_reason = ?response.finish_reason,
        "Recipe generated"
    );

    Ok(Json(RecipeResponse {
        recipe: response.text,
    }))
}
