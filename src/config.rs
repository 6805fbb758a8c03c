// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Read once at startup by each binary. Only `dump-activities` needs the
//! Strava access token, so its presence is checked separately via
//! [`Config::require_access_token`].

use std::env;
use std::path::PathBuf;

/// Default Strava API base URL.
pub const DEFAULT_STRAVA_API_URL: &str = "https://www.strava.com/api/v3";
/// Default snapshot file, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "activities.json";
/// Sport types charted when `PLOT_SPORT_TYPES` is unset.
pub const DEFAULT_SPORT_TYPES: [&str; 2] = ["Hike", "Walk"];
/// Number of past years on the annual chart.
pub const DEFAULT_LAST_N_YEARS: u32 = 5;
/// Upper bound accepted for `PLOT_LAST_N_YEARS`.
pub const MAX_LAST_N_YEARS: u32 = 100;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava bearer token (secret; only required for fetching)
    pub strava_access_token: Option<String>,
    /// Strava API base URL
    pub strava_api_url: String,
    /// Snapshot JSON file
    pub snapshot_path: PathBuf,
    /// Directory charts are written into
    pub chart_dir: PathBuf,
    /// Sport types kept by both chart pipelines
    pub sport_types: Vec<String>,
    /// Year for the monthly chart; `None` means the previous calendar year
    pub target_year: Option<i32>,
    /// Number of years on the annual chart
    pub last_n_years: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strava_access_token: None,
            strava_api_url: DEFAULT_STRAVA_API_URL.to_string(),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            chart_dir: PathBuf::from("."),
            sport_types: DEFAULT_SPORT_TYPES.iter().map(|s| s.to_string()).collect(),
            target_year: None,
            last_n_years: DEFAULT_LAST_N_YEARS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let target_year = match lookup("PLOT_TARGET_YEAR") {
            Some(v) => Some(
                v.trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("PLOT_TARGET_YEAR", v))?,
            ),
            None => None,
        };

        let last_n_years = match lookup("PLOT_LAST_N_YEARS") {
            Some(v) => {
                let parsed = v.trim().parse::<u32>();
                match parsed {
                    Ok(n) if (1..=MAX_LAST_N_YEARS).contains(&n) => n,
                    _ => return Err(ConfigError::Invalid("PLOT_LAST_N_YEARS", v)),
                }
            }
            None => defaults.last_n_years,
        };

        let sport_types = match lookup("PLOT_SPORT_TYPES") {
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => defaults.sport_types,
        };

        Ok(Self {
            strava_access_token: lookup("STRAVA_ACCESS_TOKEN").map(|v| v.trim().to_string()),
            strava_api_url: lookup("STRAVA_API_URL").unwrap_or(defaults.strava_api_url),
            snapshot_path: lookup("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.snapshot_path),
            chart_dir: lookup("CHART_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.chart_dir),
            sport_types,
            target_year,
            last_n_years,
        })
    }

    /// The Strava access token, or a configuration error if unset or blank.
    pub fn require_access_token(&self) -> Result<&str, ConfigError> {
        match self.strava_access_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::Missing("STRAVA_ACCESS_TOKEN")),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
