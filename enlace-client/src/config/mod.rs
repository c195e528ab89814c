//! Configuration management
//!
//! Settings are stored as JSON in `config.json` under the platform config
//! directory. A missing or unreadable file yields the defaults.

pub mod settings;
pub mod theme;

use std::fs;
use std::path::{Path, PathBuf};

use enlace_common::i18n::{t, t_args};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use settings::Settings;

/// Persistent application configuration
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// User preferences
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Get the platform-specific config file path
    ///
    /// Returns None if the config directory cannot be determined.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load config from a specific path, or return defaults
    ///
    /// Returns defaults if the file doesn't exist, cannot be read, or
    /// contains invalid JSON.
    pub fn load_from(path: &Path) -> Self {
        if path.exists()
            && let Ok(contents) = fs::read_to_string(path)
        {
            match serde_json::from_str(&contents) {
                Ok(config) => return config,
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "invalid config file"),
            }
        }
        Self::default()
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or_else(|| t("config-save-no-config-dir"))?;
        self.save_to(&path)
    }

    /// Save config to a specific path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                t_args("config-save-create-dir-failed", &[("error", &e.to_string())])
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            t_args("config-save-serialize-failed", &[("error", &e.to_string())])
        })?;

        fs::write(path, json)
            .map_err(|e| t_args("config-save-write-failed", &[("error", &e.to_string())]))
    }
}
