// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart monthly hiking/walking mileage for one year (the previous
//! calendar year unless `PLOT_TARGET_YEAR` is set).

use anyhow::Context;
use strava_mileage::{
    config::Config,
    logging::init_logging,
    services::{chart, monthly_mileage, snapshot},
    time_utils::current_year,
};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    let target_year = config.target_year.unwrap_or_else(|| current_year() - 1);

    let activities = snapshot::load(&config.snapshot_path).context("Failed to load activities")?;
    let monthly = monthly_mileage(&activities, &config.sport_types, target_year)?;

    let path = chart::chart_path(&config.chart_dir, &format!("monthly_miles_{}", target_year));
    chart::render_line_chart(&monthly, target_year, &path)?;
    Ok(())
}
