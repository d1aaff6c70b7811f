use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;
use std::io::{self, Write};

const BOLD: &str = "\x1b[1m";
const CLEAR_LINE: &str = "\x1b[2K";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_TIMER: &str = "⏱";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", CYAN, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Optional: formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}\n{}", CYAN, BOLD, msg, RESET);
}

/// Live elapsed-time line, redrawn in place.
pub fn timer_line(project: &str, elapsed: &str) -> String {
    format!(
        "\r{}{} {}{}{}  {}",
        CLEAR_LINE, ICON_TIMER, BOLD, elapsed, RESET, project
    )
}

/// Print a `timer_line` without a newline and flush stdout.
pub fn redraw_timer(project: &str, elapsed: &str) {
    let mut out = io::stdout().lock();
    let _ = write!(out, "{}", timer_line(project, elapsed));
    let _ = out.flush();
}

/// Print `label` as an inline prompt and flush stdout.
pub fn prompt<T: fmt::Display>(label: T) {
    let mut out = io::stdout().lock();
    let _ = write!(out, "{}{}{} ", BOLD, label, RESET);
    let _ = out.flush();
}
