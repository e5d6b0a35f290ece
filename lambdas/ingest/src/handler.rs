//! The per-invocation ingestion pipeline
//!
//! Strictly linear: decode body, validate and normalize, derive the
//! storage key, upload (or simulate), respond. Validation failures
//! short-circuit before any storage interaction.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use tracing::{debug, error, info};

use zoolanding_core::{
    decode_body, short_request_id, storage_key, validate, Config, Error, IngestEvent, RawStore,
    ResponseEnvelope,
};

/// Runtime entry point. Never fails at the runtime boundary; every
/// outcome becomes a ResponseEnvelope.
pub async fn function_handler(
    event: LambdaEvent<IngestEvent>,
    store: Option<&RawStore>,
    config: &Config,
) -> Result<ResponseEnvelope, LambdaError> {
    let (event, context) = event.into_parts();
    let request_id = short_request_id(&context.request_id);
    Ok(handle(event, &request_id, store, config).await)
}

/// Run the pipeline and map its outcome to a response, logging every
/// branch before returning. Client errors echo their message; server
/// errors keep the detail here and return a generic body.
pub async fn handle(
    event: IngestEvent,
    request_id: &str,
    store: Option<&RawStore>,
    config: &Config,
) -> ResponseEnvelope {
    match run_pipeline(&event, request_id, store, config).await {
        Ok(response) => response,
        Err(err) if err.status_code() == 400 => {
            error!(request_id = %request_id, error = %err, "Bad request");
            ResponseEnvelope::from_error(&err)
        }
        Err(err) => {
            // The error text already carries the SDK cause chain; the
            // backtrace lands only in the log stream, never the response.
            let backtrace = std::backtrace::Backtrace::capture();
            error!(request_id = %request_id, error = %err, backtrace = %backtrace, "Unhandled error");
            ResponseEnvelope::from_error(&err)
        }
    }
}

async fn run_pipeline(
    event: &IngestEvent,
    request_id: &str,
    store: Option<&RawStore>,
    config: &Config,
) -> Result<ResponseEnvelope, Error> {
    let body = decode_body(event)?;
    debug!(request_id = %request_id, decoded_len = body.len(), "Decoded body");

    let payload = validate(&body)?;
    debug!(
        request_id = %request_id,
        app_name = %payload.app_name,
        timestamp_ms = payload.timestamp_ms,
        "Validated payload"
    );

    let key = storage_key(&payload.app_name, payload.timestamp_ms, request_id)?;
    // Byte length of the exact decoded text, not of any re-serialization.
    let size = body.len();

    if config.dry_run {
        info!(
            request_id = %request_id,
            app_name = %payload.app_name,
            timestamp_ms = payload.timestamp_ms,
            bucket = %config.bucket,
            key = %key,
            size = size,
            dry_run = true,
            "Dry-run: would upload"
        );
        return Ok(ResponseEnvelope::uploaded(&config.bucket, &key, size, true));
    }

    let store = store.ok_or(Error::StorageUnavailable)?;
    if let Err(err) = store.put_raw(&key, body.as_bytes()).await {
        error!(
            request_id = %request_id,
            app_name = %payload.app_name,
            bucket = %config.bucket,
            key = %key,
            error = %err,
            "S3 upload failed"
        );
        return Err(err);
    }

    info!(
        request_id = %request_id,
        app_name = %payload.app_name,
        timestamp_ms = payload.timestamp_ms,
        bucket = %config.bucket,
        key = %key,
        size = size,
        "Uploaded analytics payload"
    );
    Ok(ResponseEnvelope::uploaded(&config.bucket, &key, size, false))
}
