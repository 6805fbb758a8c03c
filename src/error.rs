// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the fetch and plot pipelines.

use crate::config::ConfigError;
use std::path::PathBuf;

/// Application error type.
///
/// Every variant is fatal for the current run; callers propagate with `?`
/// up to the binary's `main`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {value:?}")]
    InvalidDate { value: String },

    #[error("Activity {} has no {field}", display_id(.activity_id))]
    MissingField {
        activity_id: Option<u64>,
        field: &'static str,
    },

    #[error("Chart error: {0}")]
    Chart(String),
}

impl AppError {
    /// Message used when Strava answers 429.
    pub const STRAVA_RATE_LIMIT: &'static str = "Rate limit exceeded";
    /// Message used when Strava rejects the access token (401).
    pub const STRAVA_TOKEN_ERROR: &'static str = "Invalid or expired access token";

    /// Build an I/O error tagged with the file it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// True if Strava rejected the access token (the 401 mapping).
    pub fn is_strava_token_error(&self) -> bool {
        matches!(self, AppError::StravaApi(msg) if msg == Self::STRAVA_TOKEN_ERROR)
    }
}

fn display_id(id: &Option<u64>) -> String {
    id.map_or_else(|| "<unknown>".to_string(), |id| id.to_string())
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
