//! Chart series assembly
//!
//! Walks every calendar day of the current window, zero-filling days with
//! no bucket, and pairs each day with its offset-aligned previous day.
//!
//! Alignment is plain day arithmetic: the counterpart of day `d` is
//! `d - offset_days`. Same-weekday or same-day-of-month alignment is
//! deliberately not done.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::aggregate::{Aggregate, MetricValues};
use crate::metric::Domain;
use crate::period::ResolvedPeriod;

/// One chart-ready point for a current-window day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// The current-window day (ISO 8601 calendar date)
    pub date: NaiveDate,
    /// Per-metric values for this day
    pub current: MetricValues,
    /// Per-metric values for the paired previous day, when the chart
    /// comparison is on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<MetricValues>,
    /// The paired previous day, for tooltip labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_date: Option<NaiveDate>,
}

/// Assemble the chart series for a resolved period
///
/// Produces exactly one point per day of the current window, in
/// chronological order. `previous` is consulted only when the period has
/// its chart comparison enabled.
pub fn assemble<R>(
    domain: &Domain<R>,
    period: &ResolvedPeriod,
    current: &Aggregate,
    previous: Option<&Aggregate>,
) -> Vec<ChartPoint> {
    let keys = domain.keys();
    let mut points = Vec::with_capacity(period.current.days() as usize);

    let mut day = period.current.start;
    while day <= period.current.end {
        let point = if period.chart_comparison {
            let prev_day = day - Duration::days(period.offset_days);
            ChartPoint {
                date: day,
                current: day_values(current, day, &keys),
                previous: Some(previous.map_or_else(
                    || zero_values(&keys),
                    |agg| day_values(agg, prev_day, &keys),
                )),
                previous_date: Some(prev_day),
            }
        } else {
            ChartPoint {
                date: day,
                current: day_values(current, day, &keys),
                previous: None,
                previous_date: None,
            }
        };
        points.push(point);
        day = day + Duration::days(1);
    }

    points
}

/// Bucket values for one day, zero-filled for absent days or keys
fn day_values(aggregate: &Aggregate, day: NaiveDate, keys: &[&'static str]) -> MetricValues {
    match aggregate.day(day) {
        Some(bucket) => keys
            .iter()
            .map(|k| (k.to_string(), bucket.get(*k).copied().unwrap_or(0.0)))
            .collect(),
        None => zero_values(keys),
    }
}

fn zero_values(keys: &[&'static str]) -> MetricValues {
    keys.iter().map(|k| (k.to_string(), 0.0)).collect()
}
