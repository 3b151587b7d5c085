use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::AvailabilityReport;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/check-availability",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Each ingredient classified as available, partial or missing", body = AvailabilityReport),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let report = lock_store(&state)?.check_availability(&id)?;
    Ok(Json(report))
}
