//! Record aggregation
//!
//! Filters records to a window, buckets them by calendar day, and reduces
//! each bucket (and the whole window) to one scalar per metric definition.
//!
//! Days with no records get no bucket here; zero-fill is the series
//! assembler's job.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::metric::{Aggregation, Domain, Extract, MetricDef};
use crate::period::DateWindow;

/// Per-metric scalars for one bucket or one window
pub type MetricValues = BTreeMap<String, f64>;

/// Aggregated records for one window
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    /// Per-day reductions, keyed by calendar day, ordered
    pub daily: BTreeMap<NaiveDate, MetricValues>,
    /// Reductions over the entire filtered record set
    pub totals: MetricValues,
}

impl Aggregate {
    /// Per-day values for `date`, if any records fell on it
    pub fn day(&self, date: NaiveDate) -> Option<&MetricValues> {
        self.daily.get(&date)
    }
}

/// Aggregate records over a window for a domain's metric catalog
///
/// Records with no date are excluded. An empty filtered set produces
/// zero-valued totals and no daily buckets.
pub fn aggregate<R>(records: &[R], window: &DateWindow, domain: &Domain<R>) -> Aggregate {
    let mut by_day: BTreeMap<NaiveDate, Vec<&R>> = BTreeMap::new();
    let mut filtered: Vec<&R> = Vec::new();

    for record in records {
        let Some(date) = (domain.date)(record) else {
            continue;
        };
        if !window.contains(date) {
            continue;
        }
        by_day.entry(date).or_default().push(record);
        filtered.push(record);
    }

    let daily = by_day
        .into_iter()
        .map(|(date, bucket)| (date, reduce(&bucket, &domain.metrics)))
        .collect();

    Aggregate {
        daily,
        totals: reduce(&filtered, &domain.metrics),
    }
}

/// Reduce one set of records to per-metric scalars
///
/// Ratios run in a second pass so both operands are already reduced.
fn reduce<R>(records: &[&R], metrics: &[MetricDef<R>]) -> MetricValues {
    let mut values = MetricValues::new();

    for def in metrics {
        let value = match def.aggregation {
            Aggregation::Count => records.len() as f64,
            Aggregation::Sum => reduce_sum(records, &def.extract),
            Aggregation::DistinctCount => reduce_distinct(records, &def.extract),
            Aggregation::Average => reduce_average(records, &def.extract),
            Aggregation::Ratio { .. } => continue,
        };
        values.insert(def.key.to_string(), value);
    }

    for def in metrics {
        if let Aggregation::Ratio {
            numerator,
            denominator,
        } = def.aggregation
        {
            let num = values.get(numerator).copied().unwrap_or(0.0);
            let den = values.get(denominator).copied().unwrap_or(0.0);
            let value = if den == 0.0 { 0.0 } else { num / den };
            values.insert(def.key.to_string(), value);
        }
    }

    values
}

fn reduce_sum<R>(records: &[&R], extract: &Extract<R>) -> f64 {
    let Extract::Value(value) = extract else {
        return 0.0;
    };
    records
        .iter()
        .map(|r| value(r).filter(|v| v.is_finite()).unwrap_or(0.0))
        .sum()
}

fn reduce_distinct<R>(records: &[&R], extract: &Extract<R>) -> f64 {
    let Extract::Label(label) = extract else {
        return 0.0;
    };
    let keys: HashSet<String> = records.iter().filter_map(|r| label(r)).collect();
    keys.len() as f64
}

fn reduce_average<R>(records: &[&R], extract: &Extract<R>) -> f64 {
    let Extract::Value(value) = extract else {
        return 0.0;
    };
    // Only records with a valid non-negative value participate, in both
    // the sum and the count.
    let valid: Vec<f64> = records
        .iter()
        .filter_map(|r| value(r))
        .filter(|v| v.is_finite() && *v >= 0.0)
        .collect();

    if valid.is_empty() {
        return 0.0;
    }
    valid.iter().sum::<f64>() / valid.len() as f64
}
