//! Settings file management.
//!
//! Stores settings as a JSON file in the platform config directory and
//! keeps the loaded copy behind an `RwLock` for runtime updates.

use crate::config::AppConfig;
use crate::error::GlobeError;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Settings file name
const CONFIG_FILE_NAME: &str = "config.json";

/// App directory name
const APP_DIR_NAME: &str = "globetrail";

/// Settings manager.
///
/// Loads the settings file or creates it with defaults, and persists
/// runtime updates.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a manager over the platform default settings path.
    ///
    /// Missing file: defaults are written first.
    pub fn new() -> Result<Self, GlobeError> {
        let config_path = Self::default_config_path()?;
        Self::with_path(config_path)
    }

    /// Create a manager over an explicit settings path.
    pub fn with_path(config_path: PathBuf) -> Result<Self, GlobeError> {
        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    GlobeError::Config(format!(
                        "could not create config directory {}: {e}",
                        parent.display()
                    ))
                })?;
                info!("created config directory {}", parent.display());
            }
        }

        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = AppConfig::default_config();
            Self::save_to_file(&config_path, &default_config)?;
            info!("wrote default settings to {}", config_path.display());
            default_config
        };

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Current settings (clone).
    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    /// Replace the settings and persist them.
    pub fn update(&self, new_config: AppConfig) -> Result<(), GlobeError> {
        {
            let mut config = self.config.write().unwrap();
            *config = new_config.clone();
        }
        Self::save_to_file(&self.config_path, &new_config)?;
        debug!("settings saved to {}", self.config_path.display());
        Ok(())
    }

    /// Update selected fields in place and persist.
    pub fn update_with<F>(&self, updater: F) -> Result<AppConfig, GlobeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.get();
        updater(&mut config);
        self.update(config.clone())?;
        Ok(config)
    }

    /// Path of the settings file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Re-read the settings file.
    pub fn reload(&self) -> Result<(), GlobeError> {
        let config = Self::load_from_file(&self.config_path)?;
        let mut current = self.config.write().unwrap();
        *current = config;
        info!("settings reloaded");
        Ok(())
    }

    fn default_config_path() -> Result<PathBuf, GlobeError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Platform config directory.
    pub fn config_dir() -> Result<PathBuf, GlobeError> {
        #[cfg(target_os = "macos")]
        {
            let home = std::env::var("HOME")
                .map_err(|_| GlobeError::Config("HOME is not set".to_string()))?;
            Ok(PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR_NAME))
        }

        #[cfg(target_os = "windows")]
        {
            let appdata = std::env::var("APPDATA")
                .map_err(|_| GlobeError::Config("APPDATA is not set".to_string()))?;
            Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
        }

        #[cfg(target_os = "linux")]
        {
            let home = std::env::var("HOME")
                .map_err(|_| GlobeError::Config("HOME is not set".to_string()))?;
            Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            Ok(PathBuf::from(".").join(APP_DIR_NAME))
        }
    }

    fn load_from_file(path: &PathBuf) -> Result<AppConfig, GlobeError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            GlobeError::Config(format!("could not read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| GlobeError::Config(format!("could not parse {}: {e}", path.display())))
    }

    fn save_to_file(path: &PathBuf, config: &AppConfig) -> Result<(), GlobeError> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(path, json)
            .map_err(|e| GlobeError::Config(format!("could not write {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_default_file_then_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let manager = ConfigManager::with_path(path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(manager.get().tour.step_interval_secs, 8);

        manager
            .update_with(|c| c.tour.step_interval_secs = 3)
            .unwrap();

        let reopened = ConfigManager::with_path(path).unwrap();
        assert_eq!(reopened.get().tour.step_interval_secs, 3);
    }

    #[test]
    fn rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = ConfigManager::with_path(path);
        assert!(matches!(result, Err(GlobeError::Config(_))));
    }
}
