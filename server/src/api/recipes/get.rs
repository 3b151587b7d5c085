use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::{HubError, RecipeSnapshot};

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID, e.g. R-00001")
    ),
    responses(
        (status = 200, description = "Recipe", body = RecipeSnapshot),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = lock_store(&state)?
        .recipes()
        .get_by_id(&id)
        .ok_or_else(|| HubError::recipe_not_found(&id))?;

    Ok(Json(recipe))
}
