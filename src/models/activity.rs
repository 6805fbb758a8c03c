// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava summary activity as stored in the snapshot file.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

/// One activity from `GET /athlete/activities`.
///
/// Every field is optional: keys missing from the source JSON (or set to
/// `null`) deserialize to `None`. Unknown keys are ignored. A value of the
/// wrong JSON type also reads as `None`, so a record only fails once
/// `require_distance` or `require_start_date` needs the missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    /// Strava activity ID
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub upload_id: Option<u64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub upload_id_str: Option<String>,
    /// Athlete reference (opaque)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<Value>,
    /// Activity name/title
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Distance in meters
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Moving time in seconds
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub moving_time: Option<u64>,
    /// Elapsed time in seconds
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<u64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub total_elevation_gain: Option<f64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub elev_high: Option<f64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub elev_low: Option<f64>,

    /// Legacy activity type (Ride, Run, Hike, ...)
    #[serde(deserialize_with = "lenient", rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<String>,
    /// Sport type (Hike, Walk, TrailRun, ...)
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sport_type: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<u32>,

    /// Start date/time (ISO 8601, UTC)
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Start date/time in the athlete's local time zone
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub start_date_local: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub start_latlng: Option<Vec<f64>>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub end_latlng: Option<Vec<f64>>,

    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub achievement_count: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kudos_count: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub athlete_count: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub photo_count: Option<u32>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub total_photo_count: Option<u32>,

    /// Map with summary polyline (opaque)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<Value>,

    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub trainer: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub commute: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub manual: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub flagged: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub has_kudoed: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hide_from_home: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub gear_id: Option<String>,

    /// Average speed in m/s
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub average_speed: Option<f64>,
    /// Max speed in m/s
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kilojoules: Option<f64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub average_watts: Option<f64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub device_watts: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub max_watts: Option<f64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub weighted_average_watts: Option<f64>,
}

/// Deserialize a field, mapping a value of the wrong type to `None`.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

impl Activity {
    /// Build an activity from one raw JSON object.
    ///
    /// Only a value that is not a JSON object is rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(AppError::Json(<serde_json::Error as serde::de::Error>::custom(
                format!("expected an activity object, found {}", value),
            )));
        }
        Ok(Self::deserialize(value)?)
    }

    /// Distance in meters, or an error if the activity has none.
    pub fn require_distance(&self) -> Result<f64> {
        self.distance.ok_or(AppError::MissingField {
            activity_id: self.id,
            field: "distance",
        })
    }

    /// Start date string, or an error if the activity has none.
    pub fn require_start_date(&self) -> Result<&str> {
        self.start_date.as_deref().ok_or(AppError::MissingField {
            activity_id: self.id,
            field: "start_date",
        })
    }
}
