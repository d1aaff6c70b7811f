//! Markdown work log: one table row per completed session.
//!
//! The file is meant to be opened and hand-edited in other Markdown tools, so
//! every append re-checks its state: an absent or empty file gets the table
//! header first, and a file whose last byte is not a newline gets one before
//! the new row. Project labels never contribute a `|` to the row.

use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::utils::date::{format_log_date, today};
use chrono::NaiveDate;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "Work Log.md";

pub const HEADER_TITLES: &str = "| Project | Start | End | Duration | Date |";
pub const HEADER_ALIGN: &str = "| :--- | :--- | :--- | :--- | :--- |";

/// `[[project]]` link token with every `|` replaced by `-` and every
/// control character (line breaks included) replaced by a space.
pub fn project_link(project: &str) -> String {
    let cleaned: String = project
        .chars()
        .map(|c| match c {
            '|' => '-',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect();
    format!("[[{}]]", cleaned)
}

/// One table row, newline-terminated.
pub fn format_row(session: &Session, date: NaiveDate) -> String {
    let cells = [
        project_link(&session.project),
        session.start_label(),
        session.end_label(),
        session.duration_label(),
        format_log_date(date),
    ];
    format!("| {} |\n", cells.join(" | "))
}

/// Read the final byte of `file` and report whether it is a newline.
/// An empty file counts as terminated.
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

pub struct MarkdownLog {
    dir: PathBuf,
}

impl MarkdownLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(LOG_FILE_NAME)
    }

    /// Append `session` dated today. Returns the path of the log file.
    pub fn append(&self, session: &Session) -> AppResult<PathBuf> {
        self.append_on(session, today())
    }

    /// Append `session` with an explicit date column.
    pub fn append_on(&self, session: &Session, date: NaiveDate) -> AppResult<PathBuf> {
        let path = self.path();
        Self::write_row(&path, session, date)
            .map_err(|e| AppError::file_access(&path, e))?;
        Ok(path)
    }

    fn write_row(path: &Path, session: &Session, date: NaiveDate) -> io::Result<()> {
        // Appending never creates the directory: a missing folder is an error.
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)?;

        let needs_header = file.metadata()?.len() == 0;

        let mut payload = String::new();
        if needs_header {
            payload.push_str(HEADER_TITLES);
            payload.push('\n');
            payload.push_str(HEADER_ALIGN);
            payload.push('\n');
        } else if !ends_with_newline(&mut file)? {
            payload.push('\n');
        }
        payload.push_str(&format_row(session, date));

        // Single write so a failure cannot leave half a row behind.
        file.write_all(payload.as_bytes())?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::fs;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 18)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()
    }

    fn alpha() -> Session {
        Session::new("Alpha", at(9, 0, 0), at(9, 30, 0))
    }

    #[test]
    fn new_file_gets_header_and_one_row() {
        let tmp = tempfile::tempdir().unwrap();
        let log = MarkdownLog::new(tmp.path());

        let path = log.append_on(&alpha(), day()).unwrap();

        assert_eq!(path, tmp.path().join("Work Log.md"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "| Project | Start | End | Duration | Date |\n\
             | :--- | :--- | :--- | :--- | :--- |\n\
             | [[Alpha]] | 09:00:00 | 09:30:00 | 30m | 10-18-25 |\n"
        );
    }

    #[test]
    fn empty_file_gets_header() {
        let tmp = tempfile::tempdir().unwrap();
        let log = MarkdownLog::new(tmp.path());
        fs::write(log.path(), "").unwrap();

        log.append_on(&alpha(), day()).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.starts_with(HEADER_TITLES));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn missing_trailing_newline_is_healed() {
        let tmp = tempfile::tempdir().unwrap();
        let log = MarkdownLog::new(tmp.path());
        let previous = format!("{HEADER_TITLES}\n{HEADER_ALIGN}\n| [[Old]] | 08:00:00 | 08:10:00 | 10m | 10-17-25 |");
        fs::write(log.path(), &previous).unwrap();

        log.append_on(&alpha(), day()).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            content,
            format!("{previous}\n| [[Alpha]] | 09:00:00 | 09:30:00 | 30m | 10-18-25 |\n")
        );
    }

    #[test]
    fn terminated_file_gets_no_blank_line() {
        let tmp = tempfile::tempdir().unwrap();
        let log = MarkdownLog::new(tmp.path());

        log.append_on(&alpha(), day()).unwrap();
        log.append_on(&Session::new("Beta", at(10, 0, 0), at(10, 5, 0)), day())
            .unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(!content.contains("\n\n"));
        assert_eq!(content.lines().count(), 4);
        assert!(content.ends_with("| [[Beta]] | 10:00:00 | 10:05:00 | 5m | 10-18-25 |\n"));
    }

    #[test]
    fn header_is_not_repeated_for_non_table_content() {
        let tmp = tempfile::tempdir().unwrap();
        let log = MarkdownLog::new(tmp.path());
        fs::write(log.path(), "# Notes\n").unwrap();

        log.append_on(&alpha(), day()).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(!content.contains(HEADER_TITLES));
        assert!(content.starts_with("# Notes\n| [[Alpha]]"));
    }

    #[test]
    fn pipes_in_project_become_hyphens() {
        let s = Session::new("a|b||c", at(9, 0, 0), at(9, 1, 0));
        let row = format_row(&s, day());

        assert!(row.starts_with("| [[a-b--c]] |"));
        let cells: Vec<&str> = row.trim_end().trim_matches('|').split('|').collect();
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn line_breaks_in_project_stay_on_one_row() {
        let s = Session::new("Client\nInternal\r|x\t", at(9, 0, 0), at(9, 0, 0));
        let row = format_row(&s, day());

        assert_eq!(row.lines().count(), 1);
        assert!(row.starts_with("| [[Client Internal -x ]] |"));
        let cells: Vec<&str> = row.trim_end().trim_matches('|').split('|').collect();
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn missing_directory_is_file_access_error() {
        let tmp = tempfile::tempdir().unwrap();
        let log = MarkdownLog::new(tmp.path().join("nope"));

        let err = log.append_on(&alpha(), day()).unwrap_err();
        match err {
            AppError::FileAccess { path, .. } => assert!(path.ends_with("Work Log.md")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!tmp.path().join("nope").exists());
    }

    #[test]
    fn unicode_content_round_trips_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let log = MarkdownLog::new(tmp.path());
        fs::write(log.path(), "| [[Café]] | x | y | 1m | 10-17-25 |").unwrap();

        log.append_on(&alpha(), day()).unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.starts_with("| [[Café]] | x | y | 1m | 10-17-25 |\n| [[Alpha]]"));
    }
}
