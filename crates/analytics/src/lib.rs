//! Cropflow Insights Engine
//!
//! Comparative analytics for the greenhouse dashboards: sales, planting,
//! and harvest insights computed from in-memory record snapshots.
//!
//! # Overview
//!
//! The engine is a pure, synchronous transformation. Records are fetched by
//! the caller, never mutated here, and nothing is cached between calls:
//!
//! - **Periods**: named range tokens resolve to inclusive date windows with
//!   an offset-aligned comparison window
//! - **Aggregation**: records bucket by calendar day and reduce per metric
//!   definition (count, sum, distinct, average, ratio)
//! - **Comparison**: current vs previous window totals with change percent
//!   and favorability
//! - **Series**: one chart point per current-window day, zero-filled
//!
//! # Usage
//!
//! ```ignore
//! use cropflow_analytics::{domains, PeriodRequest, RangeToken, resolve, build_report};
//!
//! let request = PeriodRequest::named(RangeToken::Last7Days);
//! let period = resolve(&request, today)?;
//! let report = build_report(&domains::sales(), &orders, &period);
//! ```
//!
//! # Comparison semantics
//!
//! KPI change percentages are always computed against a previous window,
//! even when the caller asks for no comparison (the implicit previous
//! period spans the same number of days). Only the chart overlay is
//! opt-in. `all_time` is the one range with no comparison at all.

pub mod aggregate;
pub mod compare;
pub mod domains;
pub mod error;
pub mod metric;
pub mod period;
pub mod report;
pub mod series;

#[cfg(test)]
mod period_test;
#[cfg(test)]
mod series_test;

// Re-exports for convenience
pub use aggregate::{aggregate, Aggregate};
pub use compare::{compare_totals, MetricResult};
pub use domains::{Crop, Order};
pub use error::{AnalyticsError, Result};
pub use metric::{Aggregation, Domain, Extract, MetricDef};
pub use period::{resolve, CompareToken, DateWindow, PeriodRequest, RangeToken, ResolvedPeriod};
pub use report::{build_report, InsightReport};
pub use series::{assemble, ChartPoint};
