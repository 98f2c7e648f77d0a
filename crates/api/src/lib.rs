//! Cropflow API
//!
//! HTTP surface for the insights engine, built on Axum.
//!
//! # Endpoints
//!
//! - `GET /api/v1/insights/sales` - Sales KPIs and chart series
//! - `GET /api/v1/insights/planting` - Planting KPIs and chart series
//! - `GET /api/v1/insights/harvest` - Harvest KPIs and chart series
//! - `GET /health` - Liveness check
//!
//! # Query Parameters
//!
//! - `range` - last_7_days, last_30_days, last_90_days, all_time, custom
//! - `compare` - none, previous_period, previous_week, previous_month,
//!   previous_year, custom_compare
//! - `start_date` / `end_date` - ISO dates, required for `custom`
//! - `compare_start_date` / `compare_end_date` - ISO dates, required for
//!   `custom_compare`
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use cropflow_api::{build_router, AppState, MemoryStore};
//!
//! let state = AppState::new(Arc::new(MemoryStore::default()));
//! let app = build_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;

// Re-exports
pub use error::{ApiError, Result};
pub use routes::build_router;
pub use state::AppState;
pub use store::{MemoryStore, RecordStore, StoreError};
pub use types::{ApiResponse, InsightParams};
