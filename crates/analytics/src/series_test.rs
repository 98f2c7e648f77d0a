//! Tests for chart series assembly

use chrono::{NaiveDate, TimeZone, Utc};

use crate::aggregate::aggregate;
use crate::domains::{sales, Order};
use crate::period::{resolve, CompareToken, PeriodRequest, RangeToken};
use crate::series::assemble;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn order(id: u64, y: i32, m: u32, d: u32, total: f64) -> Order {
    Order {
        id,
        completed_at: Some(Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()),
        total,
        items: 1,
    }
}

#[test]
fn test_one_point_per_window_day() {
    let today = date(2024, 6, 15);
    let period = resolve(&PeriodRequest::named(RangeToken::Last7Days), today).unwrap();
    let orders = vec![order(1, 2024, 6, 12, 45.0)];

    let current = aggregate(&orders, &period.current, &sales());
    let points = assemble(&sales(), &period, &current, None);

    assert_eq!(points.len(), 7);
    assert_eq!(points[0].date, date(2024, 6, 9));
    assert_eq!(points[6].date, date(2024, 6, 15));
    // chronological order
    for pair in points.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn test_zero_fill_for_empty_days() {
    let today = date(2024, 6, 15);
    let period = resolve(&PeriodRequest::named(RangeToken::Last7Days), today).unwrap();
    let orders = vec![order(1, 2024, 6, 12, 45.0)];

    let current = aggregate(&orders, &period.current, &sales());
    let points = assemble(&sales(), &period, &current, None);

    let nonzero: Vec<_> = points
        .iter()
        .filter(|p| p.current["total_revenue"] > 0.0)
        .collect();
    assert_eq!(nonzero.len(), 1);
    assert_eq!(nonzero[0].date, date(2024, 6, 12));

    // zero-filled days still carry every metric key
    for point in &points {
        assert_eq!(point.current.len(), sales().metrics.len());
    }
}

#[test]
fn test_no_previous_series_when_comparison_off() {
    let today = date(2024, 6, 15);
    let period = resolve(&PeriodRequest::named(RangeToken::Last7Days), today).unwrap();
    let current = aggregate(&Vec::<Order>::new(), &period.current, &sales());

    let points = assemble(&sales(), &period, &current, None);

    for point in &points {
        assert!(point.previous.is_none());
        assert!(point.previous_date.is_none());
    }
}

#[test]
fn test_offset_alignment_not_calendar_alignment() {
    let today = date(2024, 6, 15);
    let request =
        PeriodRequest::named(RangeToken::Last7Days).with_compare(CompareToken::PreviousMonth);
    let period = resolve(&request, today).unwrap();

    let orders = vec![
        order(1, 2024, 6, 12, 45.0),
        // 30 days before June 12 is May 13, not May 12
        order(2, 2024, 5, 13, 20.0),
    ];

    let domain = sales();
    let current = aggregate(&orders, &period.current, &domain);
    let previous = aggregate(&orders, &period.previous.unwrap(), &domain);

    let points = assemble(&domain, &period, &current, Some(&previous));

    let june12 = points.iter().find(|p| p.date == date(2024, 6, 12)).unwrap();
    assert_eq!(june12.previous_date, Some(date(2024, 5, 13)));
    assert_eq!(june12.previous.as_ref().unwrap()["total_revenue"], 20.0);
}

#[test]
fn test_previous_days_absent_from_buckets_zero_fill() {
    let today = date(2024, 6, 15);
    let request =
        PeriodRequest::named(RangeToken::Last7Days).with_compare(CompareToken::PreviousPeriod);
    let period = resolve(&request, today).unwrap();

    let domain = sales();
    let current = aggregate(&Vec::<Order>::new(), &period.current, &domain);
    let previous = aggregate(&Vec::<Order>::new(), &period.previous.unwrap(), &domain);

    let points = assemble(&domain, &period, &current, Some(&previous));

    for point in &points {
        let prev = point.previous.as_ref().unwrap();
        assert_eq!(prev["total_revenue"], 0.0);
        assert_eq!(point.previous_date, Some(point.date - chrono::Duration::days(7)));
    }
}
