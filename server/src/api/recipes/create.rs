use crate::api::ErrorResponse;
use crate::error::{ApiError, ValidationErrorResponse};
use crate::validation::validate_recipe;
use crate::{lock_store, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use recipe_hub_core::{RecipeInput, RecipeSnapshot};

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeInput,
    responses(
        (status = 201, description = "Recipe created", body = RecipeSnapshot),
        (status = 400, description = "Invalid recipe", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<RecipeInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_recipe(&request, false)?;

    let recipe = lock_store(&state)?.recipes_mut().add(&request)?;

    Ok((StatusCode::CREATED, Json(recipe)))
}
