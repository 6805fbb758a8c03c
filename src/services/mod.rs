// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - fetch, persist, aggregate, render.

pub mod chart;
pub mod mileage;
pub mod snapshot;
pub mod strava;

pub use mileage::{monthly_mileage, yearly_mileage, YearWindow};
pub use strava::{fetch_all, ActivitySource, StravaClient};
