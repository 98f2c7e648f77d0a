//! Metric definitions
//!
//! A [`Domain`] pairs a record type with a date accessor and a catalog of
//! metric definitions. The same aggregation engine serves every domain;
//! only the catalogs differ.

use chrono::NaiveDate;

/// How a bucket of records reduces to a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Number of records
    Count,
    /// Sum of extracted values; missing values contribute 0
    Sum,
    /// Number of distinct extracted labels
    DistinctCount,
    /// Mean of extracted values; records without a valid non-negative
    /// value are excluded from both sum and count
    Average,
    /// One already-reduced metric divided by another; zero denominator
    /// yields 0
    Ratio {
        /// Key of the numerator metric
        numerator: &'static str,
        /// Key of the denominator metric
        denominator: &'static str,
    },
}

/// Value extraction from a record
pub enum Extract<R> {
    /// Nothing to extract (count, ratio)
    Unit,
    /// A numeric value
    Value(fn(&R) -> Option<f64>),
    /// A categorical label (distinct counts)
    Label(fn(&R) -> Option<String>),
}

/// A single metric definition
pub struct MetricDef<R> {
    /// Stable key used in totals, chart points, and responses
    pub key: &'static str,
    /// Whether growth counts as improvement
    pub higher_is_better: bool,
    /// Reduction applied per bucket and per window
    pub aggregation: Aggregation,
    /// Value extraction
    pub extract: Extract<R>,
}

impl<R> MetricDef<R> {
    /// Count of records
    pub fn count(key: &'static str) -> Self {
        Self {
            key,
            higher_is_better: true,
            aggregation: Aggregation::Count,
            extract: Extract::Unit,
        }
    }

    /// Sum of a numeric field
    pub fn sum(key: &'static str, value: fn(&R) -> Option<f64>) -> Self {
        Self {
            key,
            higher_is_better: true,
            aggregation: Aggregation::Sum,
            extract: Extract::Value(value),
        }
    }

    /// Distinct count of a label
    pub fn distinct(key: &'static str, label: fn(&R) -> Option<String>) -> Self {
        Self {
            key,
            higher_is_better: true,
            aggregation: Aggregation::DistinctCount,
            extract: Extract::Label(label),
        }
    }

    /// Average of a numeric field over valid records
    pub fn average(key: &'static str, value: fn(&R) -> Option<f64>) -> Self {
        Self {
            key,
            higher_is_better: true,
            aggregation: Aggregation::Average,
            extract: Extract::Value(value),
        }
    }

    /// Ratio of two other metrics in the same bucket
    pub fn ratio(key: &'static str, numerator: &'static str, denominator: &'static str) -> Self {
        Self {
            key,
            higher_is_better: true,
            aggregation: Aggregation::Ratio {
                numerator,
                denominator,
            },
            extract: Extract::Unit,
        }
    }

    /// Invert the favorability direction (e.g. days-to-harvest)
    pub fn lower_is_better(mut self) -> Self {
        self.higher_is_better = false;
        self
    }
}

/// A record domain: date accessor plus metric catalog
pub struct Domain<R> {
    /// Domain name, used for logging and route naming
    pub name: &'static str,
    /// The timestamp field that buckets a record; `None` excludes it
    pub date: fn(&R) -> Option<NaiveDate>,
    /// Metric catalog
    pub metrics: Vec<MetricDef<R>>,
}

impl<R> Domain<R> {
    /// All metric keys, in catalog order
    pub fn keys(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.key).collect()
    }
}
