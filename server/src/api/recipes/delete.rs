use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::RecipeSnapshot;

/// Removes the recipe and its ratings for good.
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "The deleted recipe", body = RecipeSnapshot),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = lock_store(&state)?.delete_recipe(&id)?;
    Ok(Json(removed))
}
