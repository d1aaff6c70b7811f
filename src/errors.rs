//! Unified application error type.
//! All modules (config, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Timer errors
    // ---------------------------
    #[error("Project name cannot be empty")]
    EmptyProject,

    #[error("A timer is already running for project '{0}'")]
    AlreadyRunning(String),

    #[error("No timer is running")]
    NotRunning,

    // ---------------------------
    // Log file errors
    // ---------------------------
    #[error("No log directory configured (use `config --set-dir <DIR>` or `--dir <DIR>`)")]
    NoLogDirectory,

    #[error("Invalid log directory: {0}")]
    InvalidDirectory(String),

    #[error("Could not write to log file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    /// Wrap an I/O failure that happened while touching the Markdown log.
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
