use crate::api::ErrorResponse;
use crate::error::{ApiError, ValidationErrorResponse};
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::{PreparationMode, PreparationReport};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PrepareRequest {
    /// Servings to cook. Defaults to 1.
    pub servings: Option<f64>,
    #[serde(default)]
    pub mode: PreparationMode,
}

/// Deduct the scaled ingredients from stock. Shortages come back in the
/// report with a 200, not as an error.
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/prepare",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = PrepareRequest,
    responses(
        (status = 200, description = "What was used and what was short", body = PreparationReport),
        (status = 400, description = "Invalid servings", body = ValidationErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn prepare_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Option<Json<PrepareRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let servings = request.servings.unwrap_or(1.0);

    let report = lock_store(&state)?.prepare(&id, servings, request.mode)?;
    Ok(Json(report))
}
