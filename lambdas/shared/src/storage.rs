//! S3 sink for raw event bodies

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::errors::{Error, Result};

/// Raw-object store over a process-lifetime S3 client.
///
/// The client is constructed once at startup and injected; under
/// dry-run no store exists at all, so no SDK call can happen.
pub struct RawStore {
    client: Client,
    bucket: String,
}

impl RawStore {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Write the original body bytes under the derived key.
    ///
    /// Exactly one attempt; retries are left to client resubmission.
    /// The error text carries the SDK's full cause chain for the logs.
    pub async fn put_raw(&self, key: &str, body: &[u8]) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body.to_vec()))
            .content_type("application/json")
            .send()
            .await
            .map_err(|e| Error::Storage(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}
