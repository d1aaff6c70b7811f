use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::existing_dir;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of `config --check`.
#[derive(Debug, PartialEq, Eq)]
pub enum DirStatus {
    Unset,
    Missing(PathBuf),
    NotADirectory(PathBuf),
    Ready(PathBuf),
}

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", Config::config_file().display());
        println!("{}", cfg.to_json()?);
        Ok(())
    }

    pub fn dir_status(cfg: &Config) -> DirStatus {
        match cfg.log_dir() {
            None => DirStatus::Unset,
            Some(p) if p.is_dir() => DirStatus::Ready(p),
            Some(p) if p.exists() => DirStatus::NotADirectory(p),
            Some(p) => DirStatus::Missing(p),
        }
    }

    pub fn check(cfg: &Config) -> AppResult<DirStatus> {
        let path = Config::config_file();
        if path.exists() {
            success(format!("Config file: {}", path.display()));
        } else {
            warning(format!("Config file not found: {} (defaults in use)", path.display()));
        }

        let status = Self::dir_status(cfg);
        match &status {
            DirStatus::Unset => warning("log_directory is not set"),
            DirStatus::Missing(p) => warning(format!("log_directory does not exist: {}", p.display())),
            DirStatus::NotADirectory(p) => {
                warning(format!("log_directory is not a directory: {}", p.display()))
            }
            DirStatus::Ready(p) => success(format!("log_directory: {}", p.display())),
        }
        Ok(status)
    }

    /// Validate `dir` and store it in `cfg`. The file is written unless `dry_run`.
    pub fn set_dir(cfg: &mut Config, dir: &str, dry_run: bool) -> AppResult<PathBuf> {
        let resolved = existing_dir(dir)?;
        cfg.set_log_directory(&resolved);

        if !dry_run {
            let path = cfg.save()?;
            success(format!("Log directory set to {} ({})", resolved.display(), path.display()));
        } else {
            success(format!("Log directory set to {} (not saved)", resolved.display()));
        }
        Ok(resolved)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            Ok(_) | Err(_) => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
            }
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            Ok(_) | Err(_) => Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                default_editor
            ))),
        }
    }
}
