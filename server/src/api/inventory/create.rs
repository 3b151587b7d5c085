use crate::api::ErrorResponse;
use crate::error::{ApiError, ValidationErrorResponse};
use crate::validation::validate_inventory;
use crate::{lock_store, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use recipe_hub_core::{InventoryInput, InventorySnapshot};

#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = "inventory",
    request_body = InventoryInput,
    responses(
        (status = 201, description = "Item added", body = InventorySnapshot),
        (status = 400, description = "Invalid item", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<InventoryInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_inventory(&request, false)?;

    let item = lock_store(&state)?.inventory_mut().add(&request)?;

    Ok((StatusCode::CREATED, Json(item)))
}
