/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Duration color for the on-screen session list:
/// 0 minutes → grey, otherwise green.
pub fn color_for_minutes(value: i64) -> &'static str {
    if value > 0 { GREEN } else { GREY }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() {
        return colorize(value, GREY);
    }

    if is_in {
        colorize(value, GREEN)
    } else {
        colorize(value, RED)
    }
}
