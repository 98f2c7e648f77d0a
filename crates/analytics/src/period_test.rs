//! Tests for period resolution

use chrono::NaiveDate;

use crate::error::AnalyticsError;
use crate::period::{resolve, CompareToken, DateWindow, PeriodRequest, RangeToken};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_parse_range_tokens() {
    assert_eq!(RangeToken::parse("last_7_days").unwrap(), RangeToken::Last7Days);
    assert_eq!(RangeToken::parse("last_30_days").unwrap(), RangeToken::Last30Days);
    assert_eq!(RangeToken::parse("last_90_days").unwrap(), RangeToken::Last90Days);
    assert_eq!(RangeToken::parse("all_time").unwrap(), RangeToken::AllTime);
    assert_eq!(RangeToken::parse("custom").unwrap(), RangeToken::Custom);
    // short aliases and case insensitivity
    assert_eq!(RangeToken::parse("7d").unwrap(), RangeToken::Last7Days);
    assert_eq!(RangeToken::parse("LAST_30_DAYS").unwrap(), RangeToken::Last30Days);
    assert!(RangeToken::parse("fortnight").is_err());
}

#[test]
fn test_parse_compare_tokens() {
    assert_eq!(CompareToken::parse("none").unwrap(), CompareToken::None);
    assert_eq!(
        CompareToken::parse("previous_period").unwrap(),
        CompareToken::PreviousPeriod
    );
    assert_eq!(
        CompareToken::parse("previous_year").unwrap(),
        CompareToken::PreviousYear
    );
    assert!(CompareToken::parse("last_year").is_err());
}

#[test]
fn test_named_ranges_end_today() {
    let today = date(2024, 6, 15);

    let period = resolve(&PeriodRequest::named(RangeToken::Last7Days), today).unwrap();
    assert_eq!(period.current.end, today);
    assert_eq!(period.current.start, date(2024, 6, 9));
    assert_eq!(period.current.days(), 7);

    let period = resolve(&PeriodRequest::named(RangeToken::Last30Days), today).unwrap();
    assert_eq!(period.current.days(), 30);

    let period = resolve(&PeriodRequest::named(RangeToken::Last90Days), today).unwrap();
    assert_eq!(period.current.days(), 90);
}

#[test]
fn test_implicit_previous_period_for_compare_none() {
    // KPI deltas still need a previous window when compare=none.
    let today = date(2024, 6, 15);
    let period = resolve(&PeriodRequest::named(RangeToken::Last7Days), today).unwrap();

    assert!(!period.chart_comparison);
    assert_eq!(period.offset_days, 7);
    let previous = period.previous.unwrap();
    assert_eq!(previous.start, date(2024, 6, 2));
    assert_eq!(previous.end, date(2024, 6, 8));
}

#[test]
fn test_previous_month_offset_is_exactly_30_days() {
    // Offset is fixed at 30 regardless of the current window length.
    let today = date(2024, 6, 15);
    let request =
        PeriodRequest::named(RangeToken::Last7Days).with_compare(CompareToken::PreviousMonth);
    let period = resolve(&request, today).unwrap();

    assert!(period.chart_comparison);
    assert_eq!(period.offset_days, 30);
    let previous = period.previous.unwrap();
    assert_eq!(previous.start, period.current.start - chrono::Duration::days(30));
    assert_eq!(previous.days(), period.current.days());
}

#[test]
fn test_previous_year_offset_independent_of_span() {
    let today = date(2024, 6, 15);
    let request =
        PeriodRequest::named(RangeToken::Last30Days).with_compare(CompareToken::PreviousYear);
    let period = resolve(&request, today).unwrap();

    assert_eq!(period.offset_days, 365);
    assert_eq!(
        period.previous.unwrap().end,
        period.current.end - chrono::Duration::days(365)
    );
}

#[test]
fn test_previous_week_offset() {
    let today = date(2024, 6, 15);
    let request =
        PeriodRequest::named(RangeToken::Last30Days).with_compare(CompareToken::PreviousWeek);
    let period = resolve(&request, today).unwrap();
    assert_eq!(period.offset_days, 7);
}

#[test]
fn test_all_time_disables_comparison() {
    let today = date(2024, 6, 15);
    let request =
        PeriodRequest::named(RangeToken::AllTime).with_compare(CompareToken::PreviousYear);
    let period = resolve(&request, today).unwrap();

    assert!(period.previous.is_none());
    assert!(!period.chart_comparison);
    assert_eq!(period.current.start, date(1970, 1, 1));
    assert_eq!(period.current.end, today);
}

#[test]
fn test_custom_requires_both_bounds() {
    let today = date(2024, 6, 15);

    let mut request = PeriodRequest::named(RangeToken::Custom);
    request.start = Some(date(2024, 5, 1));
    let err = resolve(&request, today).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidRange(_)));

    let mut request = PeriodRequest::named(RangeToken::Custom);
    request.end = Some(date(2024, 5, 31));
    assert!(resolve(&request, today).is_err());
}

#[test]
fn test_custom_rejects_inverted_bounds() {
    let today = date(2024, 6, 15);
    let request = PeriodRequest::named(RangeToken::Custom)
        .with_bounds(date(2024, 5, 31), date(2024, 5, 1));
    let err = resolve(&request, today).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidRange(_)));
}

#[test]
fn test_custom_window_resolves() {
    let today = date(2024, 6, 15);
    let request =
        PeriodRequest::named(RangeToken::Custom).with_bounds(date(2024, 5, 1), date(2024, 5, 31));
    let period = resolve(&request, today).unwrap();

    assert_eq!(period.current.days(), 31);
    // Implicit previous period uses the custom span.
    assert_eq!(period.offset_days, 31);
}

#[test]
fn test_custom_compare_offset_from_starts() {
    let today = date(2024, 6, 15);
    let request = PeriodRequest::named(RangeToken::Last7Days)
        .with_compare(CompareToken::CustomCompare)
        .with_compare_bounds(date(2024, 5, 1), date(2024, 5, 7));
    let period = resolve(&request, today).unwrap();

    // current starts 2024-06-09; compare starts 2024-05-01 -> 39 days apart
    assert_eq!(period.offset_days, 39);
    assert_eq!(period.previous.unwrap().start, date(2024, 5, 1));
}

#[test]
fn test_custom_compare_requires_bounds() {
    let today = date(2024, 6, 15);
    let request =
        PeriodRequest::named(RangeToken::Last7Days).with_compare(CompareToken::CustomCompare);
    assert!(resolve(&request, today).is_err());
}

#[test]
fn test_window_validation() {
    assert!(DateWindow::new(date(2024, 1, 1), date(2024, 1, 31)).is_ok());
    assert!(DateWindow::new(date(2024, 1, 31), date(2024, 1, 1)).is_err());

    let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 7)).unwrap();
    assert_eq!(window.days(), 7);
    assert!(window.contains(date(2024, 1, 1)));
    assert!(window.contains(date(2024, 1, 7)));
    assert!(!window.contains(date(2024, 1, 8)));
}

#[test]
fn test_default_range_is_last_30_days() {
    let today = date(2024, 6, 15);
    let period = resolve(&PeriodRequest::default(), today).unwrap();
    assert_eq!(period.current.days(), 30);
}
