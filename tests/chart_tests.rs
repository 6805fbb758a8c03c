// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart rendering smoke tests: load fixture, aggregate, write SVG.

use strava_mileage::models::{Activity, MonthlyMileage, YearlyMileage};
use strava_mileage::services::{chart, monthly_mileage, yearly_mileage};

mod common;

fn fixture_activities() -> Vec<Activity> {
    common::fixture_page()
        .iter()
        .map(|v| Activity::from_value(v).unwrap())
        .collect()
}

#[test]
fn test_monthly_chart_from_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = chart::chart_path(dir.path(), "monthly_miles_2023");

    let monthly = monthly_mileage(&fixture_activities(), &["Hike", "Walk"], 2023).unwrap();
    assert_eq!(monthly.len(), 2);

    chart::render_line_chart(&monthly, 2023, &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Hiking Mileage 2023"));
    // One marker per populated month; missing months are not backfilled.
    assert_eq!(svg.matches("<circle").count(), 2);
}

#[test]
fn test_monthly_chart_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = chart::chart_path(dir.path(), "monthly_miles_1999");

    chart::render_line_chart(&MonthlyMileage::new(), 1999, &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Hiking Mileage 1999"));
    assert_eq!(svg.matches("<circle").count(), 0);
}

#[test]
fn test_annual_chart_from_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = chart::chart_path(dir.path(), "annual_miles");

    let yearly = yearly_mileage(&fixture_activities(), &["Hike", "Walk"], 5, 2024).unwrap();
    assert_eq!(yearly.len(), 1);
    assert!(yearly.contains_key(&2023));

    chart::render_bar_chart(&yearly, 5, 2024, &path).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Annual Miles (5 years)"));
    assert!(svg.contains("Miles"));
}

#[test]
fn test_annual_chart_all_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = chart::chart_path(dir.path(), "annual_miles");

    chart::render_bar_chart(&YearlyMileage::new(), 5, 2024, &path).unwrap();

    assert!(path.exists());
    let series = chart::annual_series(&YearlyMileage::new(), 5, 2024);
    assert_eq!(series.len(), 5);
    assert!(series.iter().all(|(_, miles)| *miles == 0.0));
}

#[test]
fn test_render_into_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/annual_miles.svg");

    let result = chart::render_bar_chart(&YearlyMileage::new(), 5, 2024, &path);

    assert!(result.is_err());
}
