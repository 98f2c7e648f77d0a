//! API request and response types
//!
//! Query parameters for the insight endpoints and the response wrapper.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cropflow_analytics::{CompareToken, PeriodRequest, RangeToken};

use crate::error::Result;

/// Query parameters for insight endpoints
#[derive(Debug, Deserialize)]
pub struct InsightParams {
    /// Range token (e.g. "last_7_days", "custom")
    #[serde(default = "default_range")]
    pub range: String,

    /// Comparison token (e.g. "previous_period", "previous_year")
    #[serde(default = "default_compare")]
    pub compare: String,

    /// Explicit range start (required for range=custom)
    pub start_date: Option<NaiveDate>,

    /// Explicit range end (required for range=custom)
    pub end_date: Option<NaiveDate>,

    /// Explicit comparison start (required for compare=custom_compare)
    pub compare_start_date: Option<NaiveDate>,

    /// Explicit comparison end (required for compare=custom_compare)
    pub compare_end_date: Option<NaiveDate>,
}

fn default_range() -> String {
    "last_30_days".to_string()
}

fn default_compare() -> String {
    "none".to_string()
}

impl InsightParams {
    /// Convert to an analytics period request
    pub fn to_request(&self) -> Result<PeriodRequest> {
        let range = RangeToken::parse(&self.range)?;
        let compare = CompareToken::parse(&self.compare)?;

        Ok(PeriodRequest {
            range: Some(range),
            start: self.start_date,
            end: self.end_date,
            compare,
            compare_start: self.compare_start_date,
            compare_end: self.compare_end_date,
        })
    }
}

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a new API response
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
