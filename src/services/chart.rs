// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mileage charts.
//!
//! The annual chart always shows a fixed range of years, with zero bars
//! for years without mileage. The monthly chart only plots months that
//! have mileage; gaps are not filled.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{AppError, Result};
use crate::models::stats::window_start;
use crate::models::{MonthlyMileage, YearlyMileage};

const CHART_SIZE: (u32, u32) = (1000, 600);
const BAR_COLOR: RGBColor = RGBColor(0, 0, 255);

/// File extension of rendered charts.
pub const CHART_EXTENSION: &str = "svg";

/// `{dir}/{stem}.svg`
pub fn chart_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}.{}", stem, CHART_EXTENSION))
}

/// One point of the monthly chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthPoint {
    /// "YYYY-MM"
    pub key: String,
    /// Full month name, e.g. "June"
    pub label: String,
    pub miles: f64,
}

/// Years `current_year - last_n_years ..= current_year - 1`, ascending,
/// each paired with its mileage (0.0 when absent).
pub fn annual_series(
    yearly: &YearlyMileage,
    last_n_years: u32,
    current_year: i32,
) -> Vec<(i32, f64)> {
    let first = window_start(current_year, last_n_years);
    (first..current_year)
        .map(|year| (year, yearly.get(&year).copied().unwrap_or(0.0)))
        .collect()
}

/// Populated months in chronological order, labelled with month names.
pub fn monthly_series(monthly: &MonthlyMileage) -> Result<Vec<MonthPoint>> {
    let mut keys: Vec<&String> = monthly.keys().collect();
    // "YYYY-MM" sorts chronologically as a string.
    keys.sort();

    keys.into_iter()
        .map(|key| {
            Ok(MonthPoint {
                key: key.clone(),
                label: month_name(key)?,
                miles: monthly[key],
            })
        })
        .collect()
}

fn month_name(key: &str) -> Result<String> {
    NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d")
        .map(|date| date.format("%B").to_string())
        .map_err(|_| AppError::InvalidDate {
            value: key.to_string(),
        })
}

/// Draw the annual bar chart to `path` as SVG.
pub fn render_bar_chart(
    yearly: &YearlyMileage,
    last_n_years: u32,
    current_year: i32,
    path: &Path,
) -> Result<()> {
    let series = annual_series(yearly, last_n_years, current_year);
    let title = format!("Annual Miles ({} years)", last_n_years);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_bar_chart(root, &title, &series).map_err(|e| AppError::Chart(format!("{:#}", e)))?;

    tracing::info!(path = %path.display(), years = series.len(), "Annual chart written");
    Ok(())
}

/// Draw the monthly line chart to `path` as SVG.
pub fn render_line_chart(monthly: &MonthlyMileage, target_year: i32, path: &Path) -> Result<()> {
    let points = monthly_series(monthly)?;
    let title = format!("Hiking Mileage {}", target_year);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_line_chart(root, &title, &points).map_err(|e| AppError::Chart(format!("{:#}", e)))?;

    tracing::info!(path = %path.display(), months = points.len(), "Monthly chart written");
    Ok(())
}

fn y_upper_bound(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0, f64::max);
    if max.is_finite() && max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn draw_bar_chart<DB>(
    root: DrawingArea<DB, Shift>,
    title: &str,
    series: &[(i32, f64)],
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let first = series.first().map_or(0, |(year, _)| *year);
    let last = series.last().map_or(first, |(year, _)| *year);
    let y_max = y_upper_bound(series.iter().map(|(_, miles)| *miles));

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28.0))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d((first..last).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(series.len().max(1))
        .x_label_formatter(&|v| match v {
            SegmentValue::Exact(year) | SegmentValue::CenterOf(year) => year.to_string(),
            SegmentValue::Last => String::new(),
        })
        .y_label_formatter(&|v| format!("{:.0}", v))
        .y_desc("Miles")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(10)
            .data(series.iter().copied()),
    )?;

    root.present()?;
    Ok(())
}

fn draw_line_chart<DB>(
    root: DrawingArea<DB, Shift>,
    title: &str,
    points: &[MonthPoint],
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let last = (points.len() as i32 - 1).max(0);
    let y_max = y_upper_bound(points.iter().map(|p| p.miles));
    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28.0))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d((0..last).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_labels(points.len().max(1))
        .x_label_formatter(&|v| {
            let idx = match v {
                SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i,
                SegmentValue::Last => return String::new(),
            };
            usize::try_from(idx)
                .ok()
                .and_then(|i| labels.get(i))
                .map(|label| label.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|v| format!("{:.0}", v))
        .y_desc("Miles")
        .draw()?;

    let coords: Vec<(SegmentValue<i32>, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (SegmentValue::CenterOf(i as i32), p.miles))
        .collect();

    chart.draw_series(LineSeries::new(coords.iter().cloned(), &BAR_COLOR))?;
    chart.draw_series(
        coords
            .iter()
            .map(|(x, y)| Circle::new((x.clone(), *y), 4, BAR_COLOR.filled())),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_series_zero_fills() {
        let mut yearly = YearlyMileage::new();
        yearly.insert(2024, 321.5);

        let series = annual_series(&yearly, 5, 2025);

        assert_eq!(
            series,
            vec![
                (2020, 0.0),
                (2021, 0.0),
                (2022, 0.0),
                (2023, 0.0),
                (2024, 321.5)
            ]
        );
    }

    #[test]
    fn test_annual_series_excludes_current_year() {
        let mut yearly = YearlyMileage::new();
        yearly.insert(2025, 10.0);
        yearly.insert(2019, 10.0);

        let series = annual_series(&yearly, 5, 2025);

        assert_eq!(series.len(), 5);
        assert!(series.iter().all(|(_, miles)| *miles == 0.0));
    }

    #[test]
    fn test_monthly_series_sorted_and_labelled() {
        let mut monthly = MonthlyMileage::new();
        monthly.insert("2023-11".to_string(), 3.0);
        monthly.insert("2023-02".to_string(), 1.0);
        monthly.insert("2023-06".to_string(), 2.0);

        let points = monthly_series(&monthly).unwrap();

        let keys: Vec<_> = points.iter().map(|p| p.key.as_str()).collect();
        let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
        let miles: Vec<_> = points.iter().map(|p| p.miles).collect();
        assert_eq!(keys, vec!["2023-02", "2023-06", "2023-11"]);
        assert_eq!(labels, vec!["February", "June", "November"]);
        assert_eq!(miles, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_monthly_series_no_backfill() {
        let mut monthly = MonthlyMileage::new();
        monthly.insert("2023-01".to_string(), 1.0);
        monthly.insert("2023-12".to_string(), 1.0);

        assert_eq!(monthly_series(&monthly).unwrap().len(), 2);
    }

    #[test]
    fn test_monthly_series_bad_key() {
        let mut monthly = MonthlyMileage::new();
        monthly.insert("June".to_string(), 1.0);

        let err = monthly_series(&monthly).unwrap_err();
        assert!(matches!(err, AppError::InvalidDate { value } if value == "June"));
    }

    #[test]
    fn test_chart_path() {
        assert_eq!(
            chart_path(Path::new("charts"), "monthly_miles_2023"),
            PathBuf::from("charts/monthly_miles_2023.svg")
        );
    }
}
