//! Insight report assembly
//!
//! The top of the engine: aggregate both windows, compare totals, and
//! assemble the chart series. Everything is computed fresh per call and
//! owned by the returned report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate;
use crate::compare::{compare_totals, MetricResult};
use crate::metric::Domain;
use crate::period::{DateWindow, ResolvedPeriod};
use crate::series::{assemble, ChartPoint};

/// A complete insight response for one domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    /// The window the report covers
    pub window: DateWindow,
    /// KPI results keyed by metric
    pub metrics: BTreeMap<String, MetricResult>,
    /// Chart series, one point per window day
    pub chart_data: Vec<ChartPoint>,
}

/// Build a report for a domain over a resolved period
pub fn build_report<R>(
    domain: &Domain<R>,
    records: &[R],
    period: &ResolvedPeriod,
) -> InsightReport {
    let current = aggregate(records, &period.current, domain);
    let previous = period
        .previous
        .as_ref()
        .map(|window| aggregate(records, window, domain));

    let metrics = compare_totals(domain, &current.totals, previous.as_ref().map(|a| &a.totals));
    let chart_data = assemble(domain, period, &current, previous.as_ref());

    tracing::debug!(
        domain = domain.name,
        days = period.current.days(),
        records = records.len(),
        comparison = period.chart_comparison,
        "built insight report"
    );

    InsightReport {
        window: period.current,
        metrics,
        chart_data,
    }
}
