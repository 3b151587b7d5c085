use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::{InventoryFilter, InventorySnapshot};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryListResponse {
    pub count: usize,
    pub items: Vec<InventorySnapshot>,
}

#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "inventory",
    params(InventoryFilter),
    responses(
        (status = 200, description = "Items matching every given filter", body = InventoryListResponse)
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(filter): Query<InventoryFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let items = lock_store(&state)?.inventory().list(&filter);

    Ok(Json(InventoryListResponse {
        count: items.len(),
        items,
    }))
}
