//! Zoolanding Ingest Lambda
//!
//! Accepts one analytics beacon per invocation, validates it, and
//! persists the original request body to the raw-data bucket under
//! `{appName}/{YYYY}/{MM}/{DD}/{timestampMs}-{shortRequestId}.json`.

use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use zoolanding_core::{Config, IngestEvent, RawStore};

mod handler;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .json()
        .with_max_level(config.log_level)
        .with_target(false)
        .init();

    // One S3 client per process, reused across invocations. Under
    // dry-run the SDK is never touched.
    let store = if config.dry_run {
        None
    } else {
        let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Some(RawStore::new(
            aws_sdk_s3::Client::new(&shared_config),
            config.bucket.clone(),
        ))
    };

    run(service_fn(|event: LambdaEvent<IngestEvent>| {
        handler::function_handler(event, store.as_ref(), &config)
    }))
    .await
}
