pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod reports;
pub mod trash;
pub mod update;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/inventory endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_items).post(create::create_item))
        .route("/bulk-delete", post(delete::bulk_delete))
        .route("/deleted", get(trash::list_deleted))
        .route("/alerts", get(reports::alerts))
        .route("/analytics", get(reports::analytics))
        .route(
            "/{id}",
            get(get::get_item)
                .put(update::update_item)
                .delete(delete::delete_item),
        )
        .route("/{id}/soft-delete", post(trash::soft_delete))
        .route("/{id}/restore", post(trash::restore))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_items,
        create::create_item,
        get::get_item,
        update::update_item,
        delete::delete_item,
        delete::bulk_delete,
        trash::soft_delete,
        trash::restore,
        trash::list_deleted,
        reports::alerts,
        reports::analytics
    ),
    components(schemas(
        list::InventoryListResponse,
        delete::BulkDeleteRequest,
        trash::DeletedItemsResponse,
    ))
)]
pub struct ApiDoc;
