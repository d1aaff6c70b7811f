use crate::utils::time::{format_hms, minutes_between};
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// A completed work session, produced by the timer when it stops.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Session {
    pub project: String,      // trimmed, never empty
    pub start: NaiveDateTime, // local time captured at start
    pub end: NaiveDateTime,   // local time captured at stop (>= start)
}

impl Session {
    /// Build a session from its endpoints.
    /// `end` is clamped to `start` so the duration is never negative.
    pub fn new(project: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            project: project.into(),
            start,
            end: end.max(start),
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whole minutes, truncated.
    pub fn duration_minutes(&self) -> i64 {
        minutes_between(self.start, self.end)
    }

    /// Duration as written in the log, e.g. `30m`.
    pub fn duration_label(&self) -> String {
        format!("{}m", self.duration_minutes())
    }

    pub fn start_label(&self) -> String {
        format_hms(self.start.time())
    }

    pub fn end_label(&self) -> String {
        format_hms(self.end.time())
    }
}
