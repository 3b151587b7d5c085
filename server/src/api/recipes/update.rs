use crate::api::ErrorResponse;
use crate::error::{ApiError, ValidationErrorResponse};
use crate::validation::validate_recipe;
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::{HubError, RecipeInput, RecipeSnapshot};

/// Only the fields present in the body are changed. A `recipeId` in the
/// body is ignored.
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = RecipeInput,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeSnapshot),
        (status = 400, description = "Invalid update", body = ValidationErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RecipeInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_recipe(&request, true)?;

    let recipe = lock_store(&state)?
        .recipes_mut()
        .update(&id, &request)?
        .ok_or_else(|| HubError::recipe_not_found(&id))?;

    Ok(Json(recipe))
}
