use chrono::{NaiveDate, NaiveDateTime};

use fmp_rs::{DateWindow, Period};

fn at(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

#[test]
fn day_window_spans_repeat_days() {
    let period = Period::parse("1 day").unwrap();
    let window = DateWindow::from_period_at(&period, 1, at("2024-03-15 10:30:00"));
    assert_eq!(window.start(), date("2024-03-15"));
    assert_eq!(window.end(), date("2024-03-14"));

    let window = DateWindow::from_period_at(&period, 10, at("2024-03-15 10:30:00"));
    assert_eq!(window.end(), date("2024-03-05"));
}

#[test]
fn sub_day_window_collapsing_to_today_moves_back_a_day() {
    let period = Period::parse("5minute").unwrap();
    let window = DateWindow::from_period_at(&period, 10, at("2024-03-15 10:30:00"));
    assert_eq!(window.start(), date("2024-03-15"));
    assert_eq!(window.end(), date("2024-03-14"));
}

#[test]
fn sub_day_window_crossing_midnight_keeps_computed_day() {
    let period = Period::parse("1hour").unwrap();
    let window = DateWindow::from_period_at(&period, 10, at("2024-03-15 03:00:00"));
    assert_eq!(window.end(), date("2024-03-14"));

    let period = Period::parse("12hours").unwrap();
    let window = DateWindow::from_period_at(&period, 10, at("2024-03-15 03:00:00"));
    assert_eq!(window.end(), date("2024-03-10"));
}

#[test]
fn week_month_year_units() {
    let now = at("2024-03-31 12:00:00");

    let w = DateWindow::from_period_at(&Period::parse("2weeks").unwrap(), 1, now);
    assert_eq!(w.end(), date("2024-03-17"));

    // Month arithmetic clamps to the last day of the target month.
    let m = DateWindow::from_period_at(&Period::parse("1month").unwrap(), 1, now);
    assert_eq!(m.end(), date("2024-02-29"));

    let y = DateWindow::from_period_at(&Period::parse("1year").unwrap(), 2, now);
    assert_eq!(y.end(), date("2022-03-31"));
}

#[test]
fn window_is_never_empty() {
    let now = at("2024-01-01 00:00:00");
    for raw in ["1minute", "30minutes", "1hour", "1day", "1week", "1month", "1year"] {
        let window = DateWindow::from_period_at(&Period::parse(raw).unwrap(), 1, now);
        assert!(window.end() < window.start(), "{raw}: {window:?}");
    }
}

#[test]
fn explicit_window_keeps_its_bounds() {
    let window = DateWindow::new(date("2024-02-01"), date("2024-01-01"));
    assert_eq!(window.start(), date("2024-02-01"));
    assert_eq!(window.end(), date("2024-01-01"));
}
