pub mod health;
pub mod inventory;
pub mod recipes;
pub mod shopping_list;

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::error::ValidationErrorResponse;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Recipe Hub", description = "Recipes, pantry inventory and what you can cook with it"),
        components(schemas(ErrorResponse, ValidationErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        health::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        inventory::ApiDoc::openapi(),
        shopping_list::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
