//! User settings for resplit
//!
//! Manages user preferences: currency symbol, default participant initials,
//! and the default tip percentage.

use serde::{Deserialize, Serialize};

use super::paths::ResplitPaths;
use crate::error::ResplitError;

/// User settings for resplit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default initials for participants, used when `--initials` is absent
    #[serde(default)]
    pub participant_initials: Vec<String>,

    /// Default tip percentage applied when a tip is included without an
    /// explicit amount or percentage
    #[serde(default = "default_tip_percent")]
    pub default_tip_percent: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_tip_percent() -> f64 {
    15.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            participant_initials: Vec::new(),
            default_tip_percent: default_tip_percent(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ResplitPaths) -> Result<Self, ResplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ResplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| ResplitError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ResplitPaths) -> Result<(), ResplitError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ResplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| ResplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
