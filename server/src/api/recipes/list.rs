use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use recipe_hub_core::{RecipeFilter, RecipeSnapshot};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeListResponse {
    pub count: usize,
    pub recipes: Vec<RecipeSnapshot>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(RecipeFilter),
    responses(
        (status = 200, description = "Recipes matching every given filter", body = RecipeListResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(filter): Query<RecipeFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let recipes = lock_store(&state)?.recipes().list(&filter);

    Ok(Json(RecipeListResponse {
        count: recipes.len(),
        recipes,
    }))
}
