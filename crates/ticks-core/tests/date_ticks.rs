// File: crates/ticks-core/tests/date_ticks.rs
// Purpose: Date tick generation in UTC: snapping, weekly Sundays, month rollover, small years, reversed ranges.

use chrono::{TimeZone, Utc};
use ticks_core::types::tick_values;
use ticks_core::{
    date_ticker, date_ticker_in, get_date_axis, get_date_axis_in, Calendar, DateTickWalker,
    Granularity, Tick, TickerOptions,
};

const DAY: f64 = 86_400_000.0;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> f64 {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap().timestamp_millis() as f64
}

fn day(y: i32, mo: u32, d: u32) -> f64 {
    utc(y, mo, d, 0, 0, 0)
}

fn opts() -> TickerOptions {
    TickerOptions::x_axis().with_labels_utc(true)
}

fn axis(start: f64, end: f64, g: Granularity) -> Vec<Tick> {
    get_date_axis_in(start, end, g, &opts(), &(), &Calendar::utc())
}

fn labels(ticks: &[Tick]) -> Vec<&str> {
    ticks.iter().map(|t| t.label.as_deref().unwrap_or("")).collect()
}

#[test]
fn daily_snaps_forward_to_midnight() {
    let ticks = axis(utc(2021, 3, 1, 5, 0, 0), day(2021, 3, 5), Granularity::Daily);
    let want: Vec<f64> = (2..=5).map(|d| day(2021, 3, d)).collect();
    assert_eq!(tick_values(&ticks), want);
    assert_eq!(labels(&ticks)[0], "02\u{a0}Mar");
}

#[test]
fn weekly_ticks_fall_on_sundays() {
    // 2021-03-03 is a Wednesday
    let ticks = axis(utc(2021, 3, 3, 12, 0, 0), day(2021, 3, 31), Granularity::Weekly);
    let want: Vec<f64> = [7, 14, 21, 28].iter().map(|&d| day(2021, 3, d)).collect();
    assert_eq!(tick_values(&ticks), want);
}

#[test]
fn monthly_rolls_into_next_year() {
    let ticks = axis(day(2020, 11, 15), day(2021, 3, 1), Granularity::Monthly);
    let want = vec![day(2020, 12, 1), day(2021, 1, 1), day(2021, 2, 1), day(2021, 3, 1)];
    assert_eq!(tick_values(&ticks), want);
    assert_eq!(
        labels(&ticks),
        vec!["Dec\u{a0}2020", "Jan\u{a0}2021", "Feb\u{a0}2021", "Mar\u{a0}2021"]
    );
}

#[test]
fn small_years_stay_small() {
    let ticks = axis(day(9, 3, 3), day(11, 4, 5), Granularity::Quarterly);
    assert_eq!(ticks.len(), 9);
    assert_eq!(ticks[0].v, Some(day(9, 4, 1)));
    assert_eq!(ticks[8].v, Some(day(11, 4, 1)));
    assert_eq!(ticks[0].label.as_deref(), Some("Apr\u{a0}9"));

    let years: Vec<i64> = DateTickWalker::new(day(9, 3, 3), day(11, 4, 5), Granularity::Quarterly, &Calendar::utc())
        .map(|(_, f)| f.year())
        .collect();
    assert_eq!(years, vec![9, 9, 9, 10, 10, 10, 10, 11, 11]);
}

#[test]
fn centennial_years() {
    let ticks = axis(day(1999, 6, 1), day(2150, 1, 1), Granularity::Centennial);
    assert_eq!(tick_values(&ticks), vec![day(2000, 1, 1), day(2100, 1, 1)]);
    assert_eq!(labels(&ticks), vec!["2000", "2100"]);
}

#[test]
fn ten_second_ticks() {
    let start = utc(2021, 1, 1, 0, 0, 3);
    let end = utc(2021, 1, 1, 0, 0, 45);
    let ticks = axis(start, end, Granularity::TenSecondly);
    let want: Vec<f64> = [10, 20, 30, 40].iter().map(|&s| utc(2021, 1, 1, 0, 0, s)).collect();
    assert_eq!(tick_values(&ticks), want);
    assert_eq!(labels(&ticks), vec!["00:00:10", "00:00:20", "00:00:30", "00:00:40"]);
}

#[test]
fn sub_second_ticks() {
    let start = 1_600_000_000_050.0;
    let ticks = axis(start, start + 450.0, Granularity::HundredMillisecondly);
    let want: Vec<f64> = (1..=5).map(|i| 1_600_000_000_000.0 + 100.0 * i as f64).collect();
    assert_eq!(tick_values(&ticks), want);
    assert_eq!(labels(&ticks)[0], "40.100");
}

#[test]
fn hourly_labels_show_day_at_midnight() {
    let ticks = axis(utc(2021, 3, 1, 22, 30, 0), utc(2021, 3, 2, 2, 0, 0), Granularity::Hourly);
    assert_eq!(labels(&ticks), vec!["23:00", "02\u{a0}Mar", "01:00", "02:00"]);
}

#[test]
fn two_hourly_keeps_even_hours() {
    let ticks = axis(utc(2021, 3, 1, 1, 0, 0), utc(2021, 3, 1, 9, 0, 0), Granularity::TwoHourly);
    let want: Vec<f64> = [2, 4, 6, 8].iter().map(|&h| utc(2021, 3, 1, h, 0, 0)).collect();
    assert_eq!(tick_values(&ticks), want);
}

#[test]
fn start_on_boundary_is_kept() {
    let ticks = axis(day(2021, 5, 1), day(2021, 5, 3), Granularity::Daily);
    assert_eq!(ticks.first().and_then(|t| t.v), Some(day(2021, 5, 1)));
    assert_eq!(ticks.len(), 3);
}

#[test]
fn reversed_range_runs_backwards() {
    let (a, b) = (day(2020, 1, 1), day(2020, 3, 1));
    let fwd = date_ticker(a, b, 400.0, &opts(), &());
    let mut rev = date_ticker(b, a, 400.0, &opts(), &());
    assert!(!fwd.is_empty());
    assert!(tick_values(&rev).windows(2).all(|w| w[0] > w[1]));
    rev.reverse();
    assert_eq!(fwd, rev);
}

#[test]
fn degenerate_ranges_are_empty() {
    let a = day(2020, 1, 1);
    assert!(date_ticker(a, a, 400.0, &opts(), &()).is_empty());
    assert!(date_ticker(a, a + 1000.0, 0.0, &opts(), &()).is_empty());
    assert!(date_ticker(f64::NAN, a, 400.0, &opts(), &()).is_empty());
    assert!(date_ticker(a, a + DAY, 400.0, &opts().with_pixels_per_label(0.0), &()).is_empty());
    assert!(date_ticker_in(a, f64::INFINITY, 400.0, &opts(), &(), &Calendar::utc()).is_empty());
}

#[test]
fn utc_option_selects_the_calendar() {
    let (a, b) = (day(2021, 3, 1), day(2021, 3, 4));
    assert_eq!(get_date_axis(a, b, Granularity::Daily, &opts(), &()), axis(a, b, Granularity::Daily));
}

#[test]
fn walker_reports_granularity() {
    let cal = Calendar::utc();
    let walker = DateTickWalker::new(day(2021, 1, 1), day(2021, 1, 2), Granularity::SixHourly, &cal);
    assert_eq!(walker.granularity(), Granularity::SixHourly);
    assert_eq!(walker.count(), 5);
}
