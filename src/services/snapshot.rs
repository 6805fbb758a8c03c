// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot file: the full activity history as one JSON array on disk.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::Activity;

/// Write `records` to `path` as a pretty-printed JSON array (4-space indent).
///
/// Any existing file is replaced wholesale. The write is not atomic.
pub fn persist<T: Serialize, P: AsRef<Path>>(records: &[T], path: P) -> Result<()> {
    let path = path.as_ref();
    let json = to_pretty_json(records)?;
    fs::write(path, json).map_err(|e| AppError::io(path, e))?;

    tracing::info!(
        count = records.len(),
        path = %path.display(),
        "Saved activities"
    );
    Ok(())
}

/// Load a snapshot and build one [`Activity`] per element.
///
/// Fails if the file is not a JSON array of objects. Field values of the
/// wrong type do not fail the load.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Activity>> {
    let path = path.as_ref();
    let json_data = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    let raw: Vec<Value> = serde_json::from_str(&json_data)?;
    let activities = raw
        .iter()
        .map(Activity::from_value)
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        count = activities.len(),
        path = %path.display(),
        "Loaded activities"
    );
    Ok(activities)
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(buf)
}
