//! System endpoints: health check and form catalogs.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::catalogs::{CURRENCIES, Currency, DEPARTMENTS, SECTORS, UNITS_OF_MEASURE};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Option lists for the console's forms.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogsResponse {
    #[schema(value_type = Vec<String>)]
    departments: &'static [&'static str],
    #[schema(value_type = Vec<Currency>)]
    currencies: &'static [Currency],
    #[schema(value_type = Vec<String>)]
    sectors: &'static [&'static str],
    #[schema(value_type = Vec<String>)]
    units_of_measure: &'static [&'static str],
}

/// `GET /config/catalogs` — Fixed option lists.
#[utoipa::path(
    get,
    path = "/config/catalogs",
    tag = "System",
    summary = "Form catalogs",
    description = "Departments, currencies, business sectors and units of measure accepted by the console.",
    responses(
        (status = 200, description = "Option lists", body = CatalogsResponse),
    )
)]
pub async fn catalogs_handler() -> Json<CatalogsResponse> {
    Json(CatalogsResponse {
        departments: DEPARTMENTS,
        currencies: CURRENCIES,
        sectors: SECTORS,
        units_of_measure: UNITS_OF_MEASURE,
    })
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/catalogs", get(catalogs_handler))
}
