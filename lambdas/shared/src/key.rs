//! Storage key derivation
//!
//! Keys partition raw events by app and UTC calendar date:
//! `{appName}/{YYYY}/{MM}/{DD}/{timestampMs}-{shortRequestId}.json`.
//! Collisions require an identical app name, millisecond timestamp,
//! and short id, which is accepted as best-effort uniqueness.

use chrono::{DateTime, Datelike};

use crate::errors::{Error, Result};

/// Build the object key for one event.
///
/// Always UTC; the environment timezone never leaks in. The timestamp
/// has already been range-checked during normalization, so the error
/// arm is effectively unreachable.
pub fn storage_key(app_name: &str, timestamp_ms: i64, short_id: &str) -> Result<String> {
    let date = DateTime::from_timestamp_millis(timestamp_ms).ok_or(Error::InvalidTimestamp)?;
    Ok(format!(
        "{}/{:04}/{:02}/{:02}/{}-{}.json",
        app_name,
        date.year(),
        date.month(),
        date.day(),
        timestamp_ms,
        short_id
    ))
}
