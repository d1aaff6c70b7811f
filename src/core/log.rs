//! Internal activity log: one JSON object per line in the config directory.

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use ansi_term::Colour;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    pub date: String, // RFC 3339, local offset
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the activity log at `path`.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = ActivityEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut line = serde_json::to_string(&entry)?;
    line.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

/// Same as `ttlog` on the default activity log, but a failure only prints a warning.
pub fn ttlog_quiet(operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&Config::activity_log_file(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Load every well-formed entry; malformed lines are skipped.
pub fn read_entries(path: &Path) -> AppResult<(Vec<ActivityEntry>, usize)> {
    if !path.exists() {
        return Ok((Vec::new(), 0));
    }

    let content = fs::read_to_string(path)?;
    let mut entries = Vec::new();
    let mut skipped = 0;
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        match serde_json::from_str::<ActivityEntry>(line) {
            Ok(e) => entries.push(e),
            Err(_) => skipped += 1,
        }
    }
    Ok((entries, skipped))
}

static ANSI_ESCAPE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI escape pattern is valid")
});

fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// ANSI colour for each operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "track" => Colour::Green,
        "add" => Colour::Cyan,
        "config" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Render entries as aligned lines (without trailing newline handling).
pub fn render_entries(entries: &[ActivityEntry]) -> Vec<String> {
    let rows: Vec<(usize, String, &str, String, &str)> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone());

            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            (i + 1, date, e.operation.as_str(), op_target, e.message.as_str())
        })
        .collect();

    let op_w = rows
        .iter()
        .map(|(_, _, _, op_target, _)| op_target.chars().count())
        .max()
        .unwrap_or(10)
        .min(60);
    let id_w = rows.len().to_string().len();
    let date_w = rows.iter().map(|(_, d, _, _, _)| d.len()).max().unwrap_or(0);

    let mut out = Vec::with_capacity(rows.len());
    for (id, date, operation, op_target, message) in rows {
        let color = color_for_operation(operation);

        // Truncate on visible characters, then colour only the operation word.
        let visible = if op_target.chars().count() > 60 {
            let mut s = op_target.chars().take(57).collect::<String>();
            s.push_str("...");
            s
        } else {
            op_target
        };

        let colored = match visible.split_once(' ') {
            Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
            None => color.paint(visible.as_str()).to_string(),
        };

        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

        out.push(format!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            id,
            date,
            colored,
            padding,
            message,
            id_w = id_w,
            date_w = date_w
        ));
    }
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let (entries, skipped) = read_entries(path)?;

        if entries.is_empty() {
            info(format!("Internal log is empty ({})", path.display()));
        } else {
            println!("📜 Internal log:\n");
            for line in render_entries(&entries) {
                println!("{}", line);
            }
        }

        if skipped > 0 {
            warning(format!("Skipped {} malformed line(s)", skipped));
        }

        Ok(())
    }
}
