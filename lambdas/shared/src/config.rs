//! Runtime configuration from environment variables

use tracing::Level;

const BUCKET_ENV: &str = "RAW_BUCKET_NAME";
const DEFAULT_BUCKET: &str = "zoolanding-data-raw";
const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
const DRY_RUN_ENV: &str = "DRY_RUN";

/// Per-process configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Target bucket for raw event objects
    pub bucket: String,
    /// Simulate uploads instead of performing them
    pub dry_run: bool,
    /// Minimum severity emitted by the subscriber
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bucket: std::env::var(BUCKET_ENV).unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
            dry_run: std::env::var(DRY_RUN_ENV)
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
            log_level: std::env::var(LOG_LEVEL_ENV)
                .map(|v| parse_level(&v))
                .unwrap_or(Level::INFO),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Unknown values fall back to INFO rather than failing startup.
fn parse_level(value: &str) -> Level {
    match value.to_ascii_uppercase().as_str() {
        "DEBUG" => Level::DEBUG,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}
