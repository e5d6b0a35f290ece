//! Inbound invocation envelope
//!
//! The ingest Lambda sits behind a proxy integration, so the event
//! carries `body` and `isBase64Encoded` like an API Gateway request.
//! Some invokers hand over a pre-parsed JSON structure instead of a
//! string body, which the stock event types cannot represent, so the
//! envelope keeps the body as a raw `serde_json::Value`.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{Error, Result};

/// Characters kept from the tail of the request id
const SHORT_ID_LEN: usize = 8;

/// The invocation envelope delivered by the runtime
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestEvent {
    /// Raw request body: text, base64 text, or a pre-parsed structure
    #[serde(default)]
    pub body: Option<Value>,
    /// Whether `body` is base64-encoded text
    #[serde(default)]
    pub is_base64_encoded: bool,
}

/// Extract the original body text from the envelope.
///
/// The returned string is what gets persisted byte-for-byte; nothing
/// downstream re-serializes it.
pub fn decode_body(event: &IngestEvent) -> Result<String> {
    let body = match &event.body {
        None | Some(Value::Null) => return Err(Error::MissingBody),
        Some(body) => body,
    };
    if matches!(body, Value::String(s) if s.is_empty()) {
        return Err(Error::MissingBody);
    }

    if event.is_base64_encoded {
        let text = body.as_str().ok_or(Error::Base64NotString)?;
        let bytes = STANDARD
            .decode(text)
            .map_err(|e| Error::InvalidBase64(e.to_string()))?;
        return String::from_utf8(bytes).map_err(|e| Error::InvalidUtf8(e.to_string()));
    }

    match body {
        Value::String(s) => Ok(s.clone()),
        // Last resort for invokers that deliver an already-parsed body.
        other => serde_json::to_string(other).map_err(|e| Error::Internal(e.to_string())),
    }
}

/// Last 8 characters of the request id, or a wall-clock fallback when
/// the runtime gives nothing usable. Uniqueness is best-effort.
pub fn short_request_id(request_id: &str) -> String {
    let chars: Vec<char> = request_id.chars().collect();
    if chars.len() >= SHORT_ID_LEN {
        return chars[chars.len() - SHORT_ID_LEN..].iter().collect();
    }
    let ticks = format!("{:x}", Utc::now().timestamp_millis());
    ticks[ticks.len().saturating_sub(SHORT_ID_LEN)..].to_string()
}
