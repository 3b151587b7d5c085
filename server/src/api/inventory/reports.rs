use crate::error::ApiError;
use crate::{lock_store, AppState};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use recipe_hub_core::alerts::{AlertReport, Analytics};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Evaluate expiry against this date (yyyy-mm-dd) instead of today.
    pub today: Option<NaiveDate>,
}

impl ReportQuery {
    fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[utoipa::path(
    get,
    path = "/api/inventory/alerts",
    tag = "inventory",
    params(ReportQuery),
    responses(
        (status = 200, description = "Low-stock, expired and expiring items, most severe first", body = AlertReport)
    )
)]
pub async fn alerts(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let report = lock_store(&state)?.alerts(query.today());
    Ok(Json(report))
}

#[utoipa::path(
    get,
    path = "/api/inventory/analytics",
    tag = "inventory",
    params(ReportQuery),
    responses(
        (status = 200, description = "Stock value and counts by category and location", body = Analytics)
    )
)]
pub async fn analytics(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let report = lock_store(&state)?.analytics(query.today());
    Ok(Json(report))
}
