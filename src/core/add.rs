use crate::core::markdown::MarkdownLog;
use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::ui::messages::success;
use chrono::{NaiveDate, NaiveTime};
use std::path::{Path, PathBuf};

/// High-level business logic for the `add` command: log a finished session
/// without running the interactive timer.
pub struct AddLogic;

impl AddLogic {
    /// Build the session for `date` from its clock times.
    /// Rejects blank projects and an end time before the start time.
    pub fn build(
        project: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> AppResult<Session> {
        let project = project.trim();
        if project.is_empty() {
            return Err(AppError::EmptyProject);
        }
        if end < start {
            return Err(AppError::InvalidTime(format!(
                "end time {} is before start time {}",
                end.format("%H:%M:%S"),
                start.format("%H:%M:%S")
            )));
        }

        Ok(Session::new(
            project,
            date.and_time(start),
            date.and_time(end),
        ))
    }

    pub fn apply(log_dir: Option<&Path>, session: &Session, date: NaiveDate) -> AppResult<PathBuf> {
        let dir = log_dir.ok_or(AppError::NoLogDirectory)?;
        let path = MarkdownLog::new(dir).append_on(session, date)?;

        success(format!(
            "Logged '{}' {} - {} ({}) to {}",
            session.project,
            session.start_label(),
            session.end_label(),
            session.duration_label(),
            path.display()
        ));

        Ok(path)
    }
}
