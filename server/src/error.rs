use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipe_hub_core::{HubError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::ErrorResponse;

pub const VALIDATION_FAILED: &str = "Validation failed. Please correct the errors and try again.";

/// Body of every 400 response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub success: bool,
    pub errors: Vec<String>,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Hub(#[from] HubError),

    #[error("{0}")]
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Hub(HubError::Validation(error))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Hub(HubError::Validation(error)) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    success: false,
                    errors: error.messages(),
                    message: VALIDATION_FAILED.to_string(),
                }),
            )
                .into_response(),
            ApiError::Hub(error @ HubError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response(),
            ApiError::Hub(error) => internal(error.to_string()),
            ApiError::Internal(message) => internal(message),
        }
    }
}

fn internal(message: String) -> Response {
    tracing::error!(error = %message, "Internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}
