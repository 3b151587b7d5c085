use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::repository::DeletedItem;
use recipe_hub_core::{HubError, InventorySnapshot};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedItemsResponse {
    pub count: usize,
    pub items: Vec<DeletedItem>,
}

/// Move an item into the recently-deleted buffer. Only the last ten
/// soft-deleted items can be restored.
#[utoipa::path(
    post,
    path = "/api/inventory/{id}/soft-delete",
    tag = "inventory",
    params(
        ("id" = String, Path, description = "Inventory ID")
    ),
    responses(
        (status = 200, description = "The soft-deleted item", body = InventorySnapshot),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn soft_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = lock_store(&state)?
        .inventory_mut()
        .soft_delete(&id)
        .ok_or_else(|| HubError::inventory_not_found(&id))?;

    Ok(Json(removed))
}

#[utoipa::path(
    post,
    path = "/api/inventory/{id}/restore",
    tag = "inventory",
    params(
        ("id" = String, Path, description = "Inventory ID")
    ),
    responses(
        (status = 200, description = "The restored item", body = InventorySnapshot),
        (status = 404, description = "Item is not in the recently-deleted buffer", body = ErrorResponse)
    )
)]
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let restored = lock_store(&state)?
        .inventory_mut()
        .restore(&id)
        .ok_or_else(|| HubError::inventory_not_found(&id))?;

    Ok(Json(restored))
}

#[utoipa::path(
    get,
    path = "/api/inventory/deleted",
    tag = "inventory",
    responses(
        (status = 200, description = "Recently deleted items, oldest first", body = DeletedItemsResponse)
    )
)]
pub async fn list_deleted(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = lock_store(&state)?.inventory().recently_deleted();

    Ok(Json(DeletedItemsResponse {
        count: items.len(),
        items,
    }))
}
