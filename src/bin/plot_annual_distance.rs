// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart annual hiking/walking mileage over the last few years.

use anyhow::Context;
use strava_mileage::{
    config::Config,
    logging::init_logging,
    services::{chart, snapshot, yearly_mileage},
    time_utils::current_year,
};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    let this_year = current_year();

    let activities = snapshot::load(&config.snapshot_path).context("Failed to load activities")?;
    let yearly = yearly_mileage(
        &activities,
        &config.sport_types,
        config.last_n_years,
        this_year,
    )?;

    let path = chart::chart_path(&config.chart_dir, "annual_miles");
    chart::render_bar_chart(&yearly, config.last_n_years, this_year, &path)?;
    Ok(())
}
