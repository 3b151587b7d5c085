pub mod availability;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod prepare;
pub mod ratings;
pub mod scale;
pub mod suggestions;
pub mod update;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/suggestions", get(suggestions::suggestions))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route(
            "/{id}/check-availability",
            get(availability::check_availability),
        )
        .route("/{id}/prepare", post(prepare::prepare_recipe))
        .route("/{id}/scale", post(scale::scale_recipe))
        .route("/{id}/rate", post(ratings::rate_recipe))
        .route("/{id}/ratings", get(ratings::get_ratings))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        suggestions::suggestions,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        availability::check_availability,
        prepare::prepare_recipe,
        scale::scale_recipe,
        ratings::rate_recipe,
        ratings::get_ratings
    ),
    components(schemas(
        list::RecipeListResponse,
        prepare::PrepareRequest,
        scale::ScaleRequest,
        ratings::RateRequest,
    ))
)]
pub struct ApiDoc;
