use crate::api::ErrorResponse;
use crate::error::{ApiError, ValidationErrorResponse};
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::ratings::{RatingOutcome, RatingSummary};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RateRequest {
    /// Whole number from 1 to 5.
    pub rating: f64,
    pub review: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/rate",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = RateRequest,
    responses(
        (status = 200, description = "Rating recorded", body = RatingOutcome),
        (status = 400, description = "Rating out of range", body = ValidationErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn rate_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = lock_store(&state)?.rate(&id, request.rating, request.review.as_deref())?;
    Ok(Json(outcome))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/ratings",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "All ratings and reviews with their average", body = RatingSummary),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_ratings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = lock_store(&state)?.rating_summary(&id)?;
    Ok(Json(summary))
}
