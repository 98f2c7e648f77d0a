//! Comparative metrics
//!
//! Combines current and previous window totals into per-metric results
//! with a change percentage and a favorability flag. Pure; never fails.

use serde::{Deserialize, Serialize};

use crate::aggregate::MetricValues;
use crate::metric::{Domain, MetricDef};

/// One KPI: current value, previous value, and their relationship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Value over the current window
    pub current_value: f64,
    /// Value over the comparison window
    pub previous_value: f64,
    /// Percent change from previous to current
    pub change_percent: f64,
    /// Whether the change is an improvement for this metric
    pub is_favorable: bool,
}

/// Percent change from `previous` to `current`
///
/// A zero previous value yields +100 for any growth and 0 for no change,
/// so charts stay renderable instead of dividing by zero.
pub fn change_percent(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Build per-metric results from current and previous window totals
///
/// `previous` is `None` when no comparison window was resolved (all_time);
/// results then carry a zero previous value and a zero change.
pub fn compare_totals<R>(
    domain: &Domain<R>,
    current: &MetricValues,
    previous: Option<&MetricValues>,
) -> std::collections::BTreeMap<String, MetricResult> {
    domain
        .metrics
        .iter()
        .map(|def| {
            let cur = sanitize(current.get(def.key).copied().unwrap_or(0.0));
            let result = match previous {
                Some(prev_totals) => {
                    let prev = sanitize(prev_totals.get(def.key).copied().unwrap_or(0.0));
                    build_result(def, cur, prev)
                }
                None => MetricResult {
                    current_value: cur,
                    previous_value: 0.0,
                    change_percent: 0.0,
                    is_favorable: true,
                },
            };
            (def.key.to_string(), result)
        })
        .collect()
}

fn build_result<R>(def: &MetricDef<R>, current: f64, previous: f64) -> MetricResult {
    MetricResult {
        current_value: current,
        previous_value: previous,
        change_percent: change_percent(current, previous),
        is_favorable: (current >= previous) == def.higher_is_better,
    }
}

/// Coerce non-finite values to 0
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
