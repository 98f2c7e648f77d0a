//! Insight API routes
//!
//! One endpoint per dashboard domain. Each handler resolves the period,
//! fetches a fresh record snapshot, and runs the engine; nothing is
//! cached between requests.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use cropflow_analytics::{build_report, domains, resolve, InsightReport};

use crate::error::Result;
use crate::state::AppState;
use crate::types::{ApiResponse, InsightParams};

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/insights", insight_routes())
        .with_state(state)
}

fn insight_routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(get_sales))
        .route("/planting", get(get_planting))
        .route("/harvest", get(get_harvest))
}

/// GET /health - Liveness check
async fn health() -> &'static str {
    "ok"
}

/// GET /api/v1/insights/sales - Sales KPIs and chart series
async fn get_sales(
    State(state): State<AppState>,
    Query(params): Query<InsightParams>,
) -> Result<Json<ApiResponse<InsightReport>>> {
    let period = resolve(&params.to_request()?, Utc::now().date_naive())?;
    let orders = state.store.orders().await?;
    let report = build_report(&domains::sales(), &orders, &period);
    Ok(Json(ApiResponse::new(report)))
}

/// GET /api/v1/insights/planting - Planting KPIs and chart series
async fn get_planting(
    State(state): State<AppState>,
    Query(params): Query<InsightParams>,
) -> Result<Json<ApiResponse<InsightReport>>> {
    let period = resolve(&params.to_request()?, Utc::now().date_naive())?;
    let crops = state.store.crops().await?;
    let report = build_report(&domains::planting(), &crops, &period);
    Ok(Json(ApiResponse::new(report)))
}

/// GET /api/v1/insights/harvest - Harvest KPIs and chart series
async fn get_harvest(
    State(state): State<AppState>,
    Query(params): Query<InsightParams>,
) -> Result<Json<ApiResponse<InsightReport>>> {
    let period = resolve(&params.to_request()?, Utc::now().date_naive())?;
    let crops = state.store.crops().await?;
    let report = build_report(&domains::harvest(), &crops, &period);
    Ok(Json(ApiResponse::new(report)))
}
