//! Mileage bucket types and period keys.
//!
//! A bucket map goes from a time period (calendar year, or "YYYY-MM") to
//! the total miles covered in that period.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, FixedOffset};

/// Meters to statute miles.
pub const METERS_TO_MILES: f64 = 0.000621371;

/// Total miles per calendar year.
pub type YearlyMileage = HashMap<i32, f64>;

/// Total miles per month, keyed "YYYY-MM".
pub type MonthlyMileage = HashMap<String, f64>;

/// First year of a window reaching `last_n_years` back from `current_year`.
///
/// Saturates instead of wrapping for out-of-range counts.
pub fn window_start(current_year: i32, last_n_years: u32) -> i32 {
    current_year.saturating_sub(i32::try_from(last_n_years).unwrap_or(i32::MAX))
}

/// Convert a distance in meters to miles.
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * METERS_TO_MILES
}

/// Calendar year of a start date.
pub fn year_key(date: &DateTime<FixedOffset>) -> i32 {
    date.year()
}

/// "YYYY-MM" of a start date.
pub fn month_key(date: &DateTime<FixedOffset>) -> String {
    date.format("%Y-%m").to_string()
}
