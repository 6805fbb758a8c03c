// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mileage aggregation over a loaded snapshot.
//!
//! Pipeline:
//! 1. Keep activities of the wanted sport types within a year window
//! 2. Convert each distance from meters to miles
//! 3. Sum miles per period (calendar year or "YYYY-MM")
//!
//! A record with a missing or unparseable start date, or a kept record
//! without a distance, aborts the whole aggregation.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Datelike, FixedOffset};

use crate::error::Result;
use crate::models::stats::{meters_to_miles, month_key, window_start, year_key};
use crate::models::{Activity, MonthlyMileage, YearlyMileage};
use crate::time_utils::parse_start_date;

/// Which start years an activity may fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearWindow {
    /// Exactly this year
    Exactly(i32),
    /// This year or any later one
    Since(i32),
}

impl YearWindow {
    pub fn contains(&self, year: i32) -> bool {
        match *self {
            YearWindow::Exactly(y) => year == y,
            YearWindow::Since(y) => year >= y,
        }
    }
}

/// Keep activities whose `sport_type` is in `sport_types` and whose start
/// year satisfies `year_predicate`. Input order is preserved.
///
/// Every record's start date is parsed, including records of other sport
/// types; the first failure is returned.
pub fn filter_by_sport_and_window<'a, S, P>(
    activities: &'a [Activity],
    sport_types: &[S],
    year_predicate: P,
) -> Result<Vec<&'a Activity>>
where
    S: AsRef<str>,
    P: Fn(i32) -> bool,
{
    let mut kept = Vec::new();

    for activity in activities {
        let start = parse_start_date(activity.require_start_date()?)?;

        let sport_matches = activity
            .sport_type
            .as_deref()
            .is_some_and(|sport| sport_types.iter().any(|s| s.as_ref() == sport));

        if sport_matches && year_predicate(start.year()) {
            kept.push(activity);
        }
    }

    tracing::debug!(
        total = activities.len(),
        kept = kept.len(),
        "Filtered activities"
    );
    Ok(kept)
}

/// Sum miles per period key.
///
/// The result does not depend on the order of `activities` (up to
/// floating-point rounding).
pub fn bucket_mileage<'a, I, K, F>(activities: I, period_key: F) -> Result<HashMap<K, f64>>
where
    I: IntoIterator<Item = &'a Activity>,
    K: Eq + Hash,
    F: Fn(&DateTime<FixedOffset>) -> K,
{
    let mut buckets: HashMap<K, f64> = HashMap::new();

    for activity in activities {
        let miles = meters_to_miles(activity.require_distance()?);
        let start = parse_start_date(activity.require_start_date()?)?;
        *buckets.entry(period_key(&start)).or_insert(0.0) += miles;
    }

    Ok(buckets)
}

/// Annual pipeline: matching activities from `current_year - last_n_years`
/// onward, bucketed by calendar year.
pub fn yearly_mileage<S: AsRef<str>>(
    activities: &[Activity],
    sport_types: &[S],
    last_n_years: u32,
    current_year: i32,
) -> Result<YearlyMileage> {
    let window = YearWindow::Since(window_start(current_year, last_n_years));
    let kept = filter_by_sport_and_window(activities, sport_types, |y| window.contains(y))?;
    let yearly = bucket_mileage(kept, year_key)?;

    for (year, miles) in &yearly {
        tracing::debug!(bucket = year, miles, "Yearly mileage");
    }
    Ok(yearly)
}

/// Monthly pipeline: matching activities in `target_year`, bucketed by
/// "YYYY-MM".
pub fn monthly_mileage<S: AsRef<str>>(
    activities: &[Activity],
    sport_types: &[S],
    target_year: i32,
) -> Result<MonthlyMileage> {
    let window = YearWindow::Exactly(target_year);
    let kept = filter_by_sport_and_window(activities, sport_types, |y| window.contains(y))?;
    let monthly = bucket_mileage(kept, month_key)?;

    for (month, miles) in &monthly {
        tracing::debug!(bucket = %month, miles, "Monthly mileage");
    }
    Ok(monthly)
}
