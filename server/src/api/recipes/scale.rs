use crate::api::ErrorResponse;
use crate::error::{ApiError, ValidationErrorResponse};
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::scaling::ScaledRecipe;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScaleRequest {
    pub new_servings: f64,
}

/// Returns the recipe rewritten for a new serving count. Nothing is stored.
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/scale",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = ScaleRequest,
    responses(
        (status = 200, description = "Original and scaled recipe", body = ScaledRecipe),
        (status = 400, description = "Invalid serving size", body = ValidationErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn scale_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ScaleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let scaled = lock_store(&state)?.scale(&id, request.new_servings)?;
    Ok(Json(scaled))
}
