//! Proxy-integration response envelope

use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;

use crate::errors::Error;

/// The `{statusCode, headers, body}` shape the proxy integration expects
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// JSON text; success carries bucket/key/size, failure carries error
    pub body: String,
}

impl ResponseEnvelope {
    fn with_body(status_code: u16, body: serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body: body.to_string(),
        }
    }

    /// 200 with the stored (or simulated) object's coordinates
    pub fn uploaded(bucket: &str, key: &str, size: usize, dry_run: bool) -> Self {
        let mut body = json!({
            "ok": true,
            "bucket": bucket,
            "key": key,
            "size": size,
        });
        if dry_run {
            body["dryRun"] = json!(true);
        }
        Self::with_body(200, body)
    }

    /// 400 or 500 depending on the error's classification
    pub fn from_error(err: &Error) -> Self {
        Self::with_body(
            err.status_code(),
            json!({ "ok": false, "error": err.public_message() }),
        )
    }
}
