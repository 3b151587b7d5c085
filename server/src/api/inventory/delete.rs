use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::repository::BulkDeleteReport;
use recipe_hub_core::{HubError, InventorySnapshot};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

/// Permanent delete. Use soft-delete to keep the item restorable.
#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    tag = "inventory",
    params(
        ("id" = String, Path, description = "Inventory ID")
    ),
    responses(
        (status = 200, description = "The deleted item", body = InventorySnapshot),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = lock_store(&state)?
        .inventory_mut()
        .delete(&id)
        .ok_or_else(|| HubError::inventory_not_found(&id))?;

    Ok(Json(removed))
}

#[utoipa::path(
    post,
    path = "/api/inventory/bulk-delete",
    tag = "inventory",
    request_body = BulkDeleteRequest,
    responses(
        (status = 200, description = "Which ids were deleted and which were unknown", body = BulkDeleteReport)
    )
)]
pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let report = lock_store(&state)?.inventory_mut().bulk_delete(&request.ids);
    Ok(Json(report))
}
