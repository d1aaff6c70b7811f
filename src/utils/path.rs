//! Path utilities: expand ~ and validate directories.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `path` and make sure it names an existing directory.
pub fn existing_dir(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_dir() {
        Ok(p)
    } else if p.exists() {
        Err(AppError::InvalidDirectory(format!(
            "{} is not a directory",
            p.display()
        )))
    } else {
        Err(AppError::InvalidDirectory(format!(
            "{} does not exist",
            p.display()
        )))
    }
}
