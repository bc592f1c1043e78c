//! Path management for Horizon
//!
//! Resolves where the settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `HORIZON_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/horizon` or `~/.config/horizon`
//! 3. Windows: `%APPDATA%\horizon`

use std::path::PathBuf;

use crate::error::HorizonError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "HORIZON_CONFIG_DIR";

/// Manages all paths used by Horizon
#[derive(Debug, Clone)]
pub struct HorizonPaths {
    /// Base directory for all Horizon configuration
    base_dir: PathBuf,
}

impl HorizonPaths {
    /// Create a new HorizonPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HorizonError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        tracing::debug!(base_dir = %base_dir.display(), "resolved config directory");
        Ok(Self { base_dir })
    }

    /// Create HorizonPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/horizon/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), HorizonError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HorizonError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HorizonError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                HorizonError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("horizon"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HorizonError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HorizonError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("horizon"))
}
