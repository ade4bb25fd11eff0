use crate::camera::connection::{DEFAULT_TIMEOUT, DEFAULT_USERNAME};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApplicationConfig {
    pub log_level: Option<String>, // CLI --debug takes precedence
    pub default_username: String,
    pub default_timeout_seconds: u64,
    pub snapshot_directory: String,
    pub filename_timestamp_format: String, // strftime format string
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            log_level: None,
            default_username: DEFAULT_USERNAME.to_string(),
            default_timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            snapshot_directory: "./snapshots".to_string(),
            filename_timestamp_format: "%Y%m%d_%H%M%S".to_string(),
        }
    }
}
