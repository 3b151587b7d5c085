pub mod api;
pub mod config;
pub mod error;
pub mod validation;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::routing::get;
use axum::{Json, Router};
use recipe_hub_core::Store;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::error::ApiError;

/// Application state shared across all handlers
pub type AppState = Arc<Mutex<Store>>;

pub fn new_state(store: Store) -> AppState {
    Arc::new(Mutex::new(store))
}

/// Lock the store for the length of one engine call. Never hold the guard
/// across an `.await`.
pub fn lock_store(state: &AppState) -> Result<MutexGuard<'_, Store>, ApiError> {
    state
        .lock()
        .map_err(|_| ApiError::Internal("Store lock poisoned".to_string()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/recipes", api::recipes::router())
        .nest("/api/inventory", api::inventory::router())
        .nest("/api/shopping-list", api::shopping_list::router())
        .merge(api::health::router())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(api::openapi()) }),
        )
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    // Health probes get a trace-level span and no completion log
                    if matched_path == "/api/health" {
                        tracing::trace_span!("http_request")
                    } else {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            path = %matched_path,
                        )
                    }
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        if span.metadata().map(|m| m.level()) == Some(&tracing::Level::TRACE) {
                            return;
                        }
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        )
}
