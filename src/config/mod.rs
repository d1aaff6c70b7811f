use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding `Work Log.md`. Unset until the user picks one.
    #[serde(default)]
    pub log_directory: Option<String>,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Return the full path of the internal activity log
    pub fn activity_log_file() -> PathBuf {
        Self::config_dir().join("activity.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_json(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the configuration file, creating its directory if needed.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;

        let path = Self::config_file();
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(&path, json).map_err(|_| AppError::ConfigSave)?;
        Ok(path)
    }

    /// Configured log directory with `~` expanded.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_directory
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(expand_tilde)
    }

    pub fn set_log_directory(&mut self, dir: &std::path::Path) {
        self.log_directory = Some(dir.to_string_lossy().to_string());
    }
}
