use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{extract::State, response::IntoResponse, Json};
use recipe_hub_core::SuggestionReport;

#[utoipa::path(
    get,
    path = "/api/recipes/suggestions",
    tag = "recipes",
    responses(
        (status = 200, description = "Up to ten recipes ranked by how many ingredients are in stock", body = SuggestionReport)
    )
)]
pub async fn suggestions(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let report = lock_store(&state)?.suggest();
    Ok(Json(report))
}
