//! Path management for resplit
//!
//! Provides XDG-compliant path resolution for configuration data.
//!
//! ## Path Resolution Order
//!
//! 1. `RESPLIT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/resplit` or `~/.config/resplit`
//! 3. Windows: `%APPDATA%\resplit`

use std::path::PathBuf;

use crate::error::ResplitError;

/// Manages all paths used by resplit
#[derive(Debug, Clone)]
pub struct ResplitPaths {
    /// Base directory for all resplit data
    base_dir: PathBuf,
}

impl ResplitPaths {
    /// Create a new ResplitPaths instance
    ///
    /// Path resolution:
    /// 1. `RESPLIT_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/resplit` or `~/.config/resplit`
    /// 3. Windows: `%APPDATA%\resplit`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ResplitError> {
        let base_dir = if let Ok(custom) = std::env::var("RESPLIT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ResplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/resplit/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ResplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ResplitError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if resplit has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ResplitError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| ResplitError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("resplit"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ResplitError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ResplitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("resplit"))
}
