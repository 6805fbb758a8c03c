// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dump every Strava activity of the authenticated athlete to a JSON
//! snapshot file.

use anyhow::Context;
use strava_mileage::{
    config::Config,
    logging::init_logging,
    services::{fetch_all, snapshot, StravaClient},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Fail before touching the network if the token is missing
    let config = Config::from_env().context("Failed to load configuration")?;
    let token = config.require_access_token()?;

    tracing::info!(api = %config.strava_api_url, "Fetching Strava activities");
    let client = StravaClient::new(&config.strava_api_url, token);

    let activities = match fetch_all(&client).await {
        Ok(activities) => activities,
        Err(e) => {
            if e.is_strava_token_error() {
                tracing::error!("Strava rejected the access token; generate a new one");
            }
            return Err(e).context("Failed to fetch activities");
        }
    };

    snapshot::persist(&activities, &config.snapshot_path)
        .context("Failed to save activities")?;
    Ok(())
}
