//! Period resolution
//!
//! Turns a named range token (plus optional explicit bounds) into a concrete
//! inclusive date window, paired with an offset-aligned comparison window.
//!
//! Comparison windows are derived by shifting the current window back a
//! whole number of days, never by calendar-position alignment.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Start date used for the `all_time` range.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// An inclusive calendar-date window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day of the window (inclusive)
    pub start: NaiveDate,
    /// Last day of the window (inclusive)
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a new window, validating the bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(AnalyticsError::InvalidRange(format!(
                "start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Number of calendar days in the window (both endpoints count)
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether a date falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The same window shifted back by `days`
    pub fn shifted_back(&self, days: i64) -> Self {
        Self {
            start: self.start - Duration::days(days),
            end: self.end - Duration::days(days),
        }
    }
}

/// Named range token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeToken {
    /// The 7 days ending today
    Last7Days,
    /// The 30 days ending today
    Last30Days,
    /// The 90 days ending today
    Last90Days,
    /// Everything on record; comparison is disabled
    AllTime,
    /// Explicit bounds, both required
    Custom,
}

impl RangeToken {
    /// Parse a range token from a query-string value
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "last_7_days" | "7d" => Ok(Self::Last7Days),
            "last_30_days" | "30d" => Ok(Self::Last30Days),
            "last_90_days" | "90d" => Ok(Self::Last90Days),
            "all_time" | "all" => Ok(Self::AllTime),
            "custom" => Ok(Self::Custom),
            other => Err(AnalyticsError::UnknownRange(other.to_string())),
        }
    }
}

/// Comparison mode token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareToken {
    /// No chart overlay; KPI deltas still use the implicit previous period
    #[default]
    None,
    /// Previous window of the same length
    PreviousPeriod,
    /// Shift back 7 days
    PreviousWeek,
    /// Shift back 30 days
    PreviousMonth,
    /// Shift back 365 days
    PreviousYear,
    /// Explicit comparison bounds, both required
    CustomCompare,
}

impl CompareToken {
    /// Parse a compare token from a query-string value
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "previous_period" | "previous" => Ok(Self::PreviousPeriod),
            "previous_week" => Ok(Self::PreviousWeek),
            "previous_month" => Ok(Self::PreviousMonth),
            "previous_year" => Ok(Self::PreviousYear),
            "custom_compare" => Ok(Self::CustomCompare),
            other => Err(AnalyticsError::UnknownCompare(other.to_string())),
        }
    }
}

/// A period resolution request
#[derive(Debug, Clone, Default)]
pub struct PeriodRequest {
    /// Main range token
    pub range: Option<RangeToken>,
    /// Explicit start (required for `custom`)
    pub start: Option<NaiveDate>,
    /// Explicit end (required for `custom`)
    pub end: Option<NaiveDate>,
    /// Comparison token
    pub compare: CompareToken,
    /// Explicit comparison start (required for `custom_compare`)
    pub compare_start: Option<NaiveDate>,
    /// Explicit comparison end (required for `custom_compare`)
    pub compare_end: Option<NaiveDate>,
}

impl PeriodRequest {
    /// Request a named range with no chart comparison
    pub fn named(range: RangeToken) -> Self {
        Self {
            range: Some(range),
            ..Self::default()
        }
    }

    /// Set the comparison token
    pub fn with_compare(mut self, compare: CompareToken) -> Self {
        self.compare = compare;
        self
    }

    /// Set explicit main-range bounds
    pub fn with_bounds(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Set explicit comparison bounds
    pub fn with_compare_bounds(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.compare_start = Some(start);
        self.compare_end = Some(end);
        self
    }
}

/// A fully resolved period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPeriod {
    /// The window records are reported over
    pub current: DateWindow,
    /// Comparison window; `None` only for `all_time`
    pub previous: Option<DateWindow>,
    /// Day offset between paired current/previous days
    pub offset_days: i64,
    /// Whether the chart surfaces the previous series
    pub chart_comparison: bool,
}

/// Resolve a period request against a reference "today"
///
/// Resolution is all-or-nothing: any malformed or missing explicit bound
/// fails the whole request.
pub fn resolve(request: &PeriodRequest, today: NaiveDate) -> Result<ResolvedPeriod> {
    let range = request.range.unwrap_or(RangeToken::Last30Days);

    let current = match range {
        RangeToken::Last7Days => window_ending(today, 7),
        RangeToken::Last30Days => window_ending(today, 30),
        RangeToken::Last90Days => window_ending(today, 90),
        RangeToken::AllTime => DateWindow {
            start: epoch(),
            end: today,
        },
        RangeToken::Custom => custom_window(request.start, request.end)?,
    };

    // all_time has no meaningful previous window, so comparison is off
    // entirely, whatever the caller asked for.
    if range == RangeToken::AllTime {
        return Ok(ResolvedPeriod {
            current,
            previous: None,
            offset_days: 0,
            chart_comparison: false,
        });
    }

    let (previous, offset_days) = match request.compare {
        CompareToken::None | CompareToken::PreviousPeriod => {
            let offset = current.days();
            (current.shifted_back(offset), offset)
        }
        CompareToken::PreviousWeek => (current.shifted_back(7), 7),
        CompareToken::PreviousMonth => (current.shifted_back(30), 30),
        CompareToken::PreviousYear => (current.shifted_back(365), 365),
        CompareToken::CustomCompare => {
            let previous = custom_window(request.compare_start, request.compare_end)?;
            let offset = (current.start - previous.start).num_days();
            (previous, offset)
        }
    };

    Ok(ResolvedPeriod {
        current,
        previous: Some(previous),
        offset_days,
        chart_comparison: request.compare != CompareToken::None,
    })
}

/// Window of `days` calendar days ending at `today` inclusive
fn window_ending(today: NaiveDate, days: i64) -> DateWindow {
    DateWindow {
        start: today - Duration::days(days - 1),
        end: today,
    }
}

fn custom_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<DateWindow> {
    match (start, end) {
        (Some(start), Some(end)) => DateWindow::new(start, end),
        (None, _) => Err(AnalyticsError::InvalidRange(
            "custom range requires a start date".to_string(),
        )),
        (_, None) => Err(AnalyticsError::InvalidRange(
            "custom range requires an end date".to_string(),
        )),
    }
}
