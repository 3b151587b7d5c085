use crate::error::{ApiError, ValidationErrorResponse};
use crate::{lock_store, AppState};
use axum::{extract::State, response::IntoResponse, Json};
use recipe_hub_core::ShoppingList;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListRequest {
    #[serde(default)]
    pub recipe_ids: Vec<String>,
}

/// Everything the given recipes need that is missing or at zero stock.
#[utoipa::path(
    post,
    path = "/api/shopping-list",
    tag = "shopping_list",
    request_body = ShoppingListRequest,
    responses(
        (status = 200, description = "Ingredients to buy, each tagged with an aisle category", body = ShoppingList),
        (status = 400, description = "No recipe ids given", body = ValidationErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<ShoppingListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let list = lock_store(&state)?.shopping_list(&request.recipe_ids)?;
    Ok(Json(list))
}
