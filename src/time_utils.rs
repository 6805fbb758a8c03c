// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime};

use crate::error::{AppError, Result};

/// Parse a Strava timestamp such as `2023-06-15T10:00:00Z`.
///
/// A trailing `Z` is read as `+00:00`. Timestamps without any offset are
/// taken to be UTC.
pub fn parse_start_date(value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    let normalized = match trimmed.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => trimmed.to_string(),
    };

    if let Ok(date) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(date);
    }

    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|_| AppError::InvalidDate {
            value: value.to_string(),
        })
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}
