//! User settings for the expense tracker
//!
//! Display and logging preferences, stored as `config.json` next to the data.
//! Every field has a serde default so partial or older files still load.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::storage::file_io::read_json;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Width of the bars in the category chart
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            log_level: default_log_level(),
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Nothing is written; the file is only ever edited by hand.
    pub fn load(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        read_json(paths.settings_file()).map_err(|e| match e {
            TrackerError::Storage(msg) => TrackerError::Config(msg),
            other => other,
        })
    }
}
