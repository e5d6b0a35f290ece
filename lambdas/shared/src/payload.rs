//! Payload validation and timestamp normalization
//!
//! Only `appName` and `timestamp` are read; every other field passes
//! through untouched because the stored artifact is the original body
//! text, never a re-serialization of the parsed structure.

use chrono::{DateTime, Datelike};
use serde_json::Value;

use crate::errors::{Error, Result};

/// Numeric timestamps at or above this are already in milliseconds
const MS_THRESHOLD: f64 = 1e12;

/// The two fields the pipeline needs, extracted and normalized
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPayload {
    /// Used verbatim as the leading key segment
    pub app_name: String,
    /// Milliseconds since epoch, UTC
    pub timestamp_ms: i64,
}

/// Parse the body text as JSON and check the required fields.
pub fn validate(body: &str) -> Result<ValidatedPayload> {
    let payload: Value =
        serde_json::from_str(body).map_err(|e| Error::InvalidJson(e.to_string()))?;

    let app_name = match payload.get("appName").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => return Err(Error::InvalidAppName),
    };

    let ts = payload
        .get("timestamp")
        .and_then(Value::as_f64)
        .ok_or(Error::InvalidTimestamp)?;

    Ok(ValidatedPayload {
        app_name,
        timestamp_ms: normalize_timestamp_ms(ts)?,
    })
}

/// Normalize an epoch timestamp to milliseconds.
///
/// Values below 10^12 are seconds and get multiplied by 1000; the
/// result is truncated toward zero, never rounded. Already-millisecond
/// inputs pass through unchanged.
pub fn normalize_timestamp_ms(ts: f64) -> Result<i64> {
    if !ts.is_finite() {
        return Err(Error::InvalidTimestamp);
    }
    let ms = if ts >= MS_THRESHOLD { ts } else { ts * 1000.0 } as i64;
    // Keys carry a 4-digit year, so anything outside years 1-9999 is
    // rejected up front and the key deriver never fails.
    let date = DateTime::from_timestamp_millis(ms).ok_or(Error::InvalidTimestamp)?;
    if !(1..=9999).contains(&date.year()) {
        return Err(Error::InvalidTimestamp);
    }
    Ok(ms)
}
