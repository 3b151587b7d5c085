use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::{HubError, InventorySnapshot};

#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    tag = "inventory",
    params(
        ("id" = String, Path, description = "Inventory ID, e.g. I-00001")
    ),
    responses(
        (status = 200, description = "Inventory item", body = InventorySnapshot),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let item = lock_store(&state)?
        .inventory()
        .get_by_id(&id)
        .ok_or_else(|| HubError::inventory_not_found(&id))?;

    Ok(Json(item))
}
