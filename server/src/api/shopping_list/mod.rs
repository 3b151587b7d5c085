pub mod generate;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/shopping-list endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(generate::generate))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate::generate),
    components(schemas(generate::ShoppingListRequest))
)]
pub struct ApiDoc;
