//! User settings for Horizon
//!
//! Display preferences that the CLI applies on top of the pure formatting
//! functions: which UTC offset to render timestamps in, and how many days a
//! transaction stays "Processing".

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::paths::HorizonPaths;
use crate::error::HorizonError;
use crate::reports::status::PROCESSING_WINDOW_DAYS;

/// User settings for Horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Offset from UTC, in minutes, used when rendering timestamps
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Days a transaction is reported as "Processing"
    #[serde(default = "default_processing_window_days")]
    pub processing_window_days: i64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_processing_window_days() -> i64 {
    PROCESSING_WINDOW_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            utc_offset_minutes: 0,
            processing_window_days: default_processing_window_days(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &HorizonPaths) -> Result<Self, HorizonError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                HorizonError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HorizonError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            tracing::debug!("no settings file, using defaults");
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HorizonPaths) -> Result<(), HorizonError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            HorizonError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            HorizonError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Check that the stored values are usable
    pub fn validate(&self) -> Result<(), HorizonError> {
        self.display_offset()?;
        if self.processing_window_days < 0 {
            return Err(HorizonError::Config(format!(
                "processing_window_days must not be negative, got {}",
                self.processing_window_days
            )));
        }
        Ok(())
    }

    /// The fixed offset timestamps are rendered in
    pub fn display_offset(&self) -> Result<FixedOffset, HorizonError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                HorizonError::Config(format!(
                    "utc_offset_minutes out of range: {}",
                    self.utc_offset_minutes
                ))
            })
    }
}
