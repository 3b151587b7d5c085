use crate::api::ErrorResponse;
use crate::error::{ApiError, ValidationErrorResponse};
use crate::validation::validate_inventory;
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::{HubError, InventoryInput, InventorySnapshot};

#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    tag = "inventory",
    params(
        ("id" = String, Path, description = "Inventory ID")
    ),
    request_body = InventoryInput,
    responses(
        (status = 200, description = "Item updated", body = InventorySnapshot),
        (status = 400, description = "Invalid update", body = ValidationErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<InventoryInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate_inventory(&request, true)?;

    let item = lock_store(&state)?
        .inventory_mut()
        .update(&id, &request)?
        .ok_or_else(|| HubError::inventory_not_found(&id))?;

    Ok(Json(item))
}
