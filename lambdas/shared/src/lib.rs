//! Zoolanding Ingestion Core
//!
//! Shared functionality for the raw-analytics ingest Lambda including:
//! - Inbound envelope decoding
//! - Payload validation and timestamp normalization
//! - Storage key derivation
//! - S3 raw-object sink
//! - Response shaping and error types

pub mod config;
pub mod envelope;
pub mod errors;
pub mod key;
pub mod payload;
pub mod response;
pub mod storage;

pub use config::Config;
pub use envelope::{decode_body, short_request_id, IngestEvent};
pub use errors::{Error, Result};
pub use key::storage_key;
pub use payload::{validate, ValidatedPayload};
pub use response::ResponseEnvelope;
pub use storage::RawStore;
