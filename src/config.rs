//! Runtime configuration read from the environment.
//!
//! Variables (a `.env` file is honoured by the binary):
//! - `LAUNCH_DATASET`: dataset path or URL
//! - `LOG_FILE_PATH`: JSON log file, rotated daily

use crate::dataset::DEFAULT_DATASET_URL;

pub const DEFAULT_LOG_FILE_PATH: &str = "logs/launch_dash.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashConfig {
    pub dataset_source: String,
    pub log_file_path: String,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            dataset_source: DEFAULT_DATASET_URL.to_string(),
            log_file_path: DEFAULT_LOG_FILE_PATH.to_string(),
        }
    }
}

impl DashConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup; blank values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str, default: String| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(default)
        };

        Self {
            dataset_source: get("LAUNCH_DATASET", defaults.dataset_source),
            log_file_path: get("LOG_FILE_PATH", defaults.log_file_path),
        }
    }
}
