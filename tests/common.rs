#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home (config lives here) plus a log directory.
pub struct Sandbox {
    pub home: TempDir,
    pub logs: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("home tempdir"),
            logs: tempfile::tempdir().expect("logs tempdir"),
        }
    }

    /// Binary with HOME/APPDATA pointed at the sandbox.
    pub fn rwl(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rworklog");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("EDITOR")
            .env_remove("VISUAL");
        cmd
    }

    pub fn logs_arg(&self) -> String {
        self.logs.path().to_string_lossy().to_string()
    }

    pub fn log_file(&self) -> PathBuf {
        self.logs.path().join("Work Log.md")
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_file()).expect("read Work Log.md")
    }

    pub fn config_file(&self) -> PathBuf {
        config_dir(self.home.path()).join("config.json")
    }

    pub fn activity_file(&self) -> PathBuf {
        config_dir(self.home.path()).join("activity.log")
    }
}

fn config_dir(home: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        home.join("rworklog")
    } else {
        home.join(".rworklog")
    }
}

/// Today's date as written in the log's Date column.
pub fn today_label() -> String {
    chrono::Local::now().format("%m-%d-%y").to_string()
}

/// Split a table row into its trimmed cells.
pub fn cells(row: &str) -> Vec<String> {
    row.trim()
        .trim_start_matches('|')
        .trim_end_matches('|')
        .split('|')
        .map(|c| c.trim().to_string())
        .collect()
}
