//! Time utilities: parsing HH:MM[:SS], duration computations, clock labels.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Whole minutes between two timestamps, truncated and never negative.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let duration = end - start;
    duration.num_minutes().max(0)
}

/// `HH:MM:SS` clock label, as written in the log file.
pub fn format_hms(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Elapsed time for the live display, e.g. `01:02:03`.
/// Hours are not wrapped at 24.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
