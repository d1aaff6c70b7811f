use crate::core::log::ttlog;
use crate::core::markdown::MarkdownLog;
use crate::core::ticker::{DEFAULT_INTERVAL, Ticker};
use crate::core::timer::{TimerController, TimerState};
use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::ui::messages::{error, header, info, prompt, redraw_timer, success, warning};
use crate::utils::colors::{color_for_minutes, colorize, colorize_in_out};
use crate::utils::format_elapsed;
use crate::utils::time::format_hms;
use crate::utils::table::{Column, Table};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Duration as StdDuration;

/// Read one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn is_quit(label: &str) -> bool {
    matches!(label.trim(), "q" | "quit")
}

/// Write `session` to the Markdown log in `log_dir`.
pub fn persist(session: &Session, log_dir: Option<&Path>) -> AppResult<PathBuf> {
    let dir = log_dir.ok_or(AppError::NoLogDirectory)?;
    MarkdownLog::new(dir).append(session)
}

/// High-level business logic for the interactive `track` command.
///
/// Owns the timer for the lifetime of the loop and keeps the sessions
/// completed in this run for the on-screen list.
pub struct TrackLogic {
    controller: TimerController,
    log_dir: Option<PathBuf>,
    completed: Vec<Session>,
    interval: StdDuration,
    activity_log: Option<PathBuf>,
}

impl TrackLogic {
    pub fn new(log_dir: Option<PathBuf>) -> Self {
        Self {
            controller: TimerController::new(),
            log_dir,
            completed: Vec::new(),
            interval: DEFAULT_INTERVAL,
            activity_log: None,
        }
    }

    pub fn with_interval(mut self, interval: StdDuration) -> Self {
        self.interval = interval;
        self
    }

    /// Record each saved session in the internal activity log at `path`.
    pub fn with_activity_log(mut self, path: PathBuf) -> Self {
        self.activity_log = Some(path);
        self
    }

    pub fn completed(&self) -> &[Session] {
        &self.completed
    }

    /// Prompt for projects and time them until `q`, `quit` or end of input.
    /// `first_project` skips the first prompt.
    pub fn run<R: BufRead>(&mut self, mut input: R, first_project: Option<String>) -> AppResult<()> {
        if self.log_dir.is_none() {
            warning("No log directory configured: sessions will not be saved.");
        }

        let mut pending = first_project;
        loop {
            let label = match pending.take() {
                Some(p) => p,
                None => {
                    prompt("Project (q to quit):");
                    match read_line(&mut input)? {
                        Some(l) => l,
                        None => {
                            println!();
                            break;
                        }
                    }
                }
            };

            if is_quit(&label) {
                break;
            }

            if let Err(e) = self.controller.start(&label) {
                error(e);
                continue;
            }

            self.time_until_enter(&mut input)?;
        }

        Ok(())
    }

    /// Show the live timer until a line (or end of input) arrives, then stop
    /// and record the session.
    fn time_until_enter<R: BufRead>(&mut self, input: &mut R) -> AppResult<()> {
        let (project, started_at) = match self.controller.state() {
            TimerState::Running {
                project,
                started_at,
            } => (project.clone(), *started_at),
            TimerState::Idle => return Err(AppError::NotRunning),
        };

        info(format!(
            "Started '{}' at {}. Press Enter to stop.",
            project,
            colorize_in_out(&format_hms(started_at.time()), true)
        ));

        let ticker = Ticker::spawn(started_at, self.interval, move |elapsed| {
            redraw_timer(&project, &format_elapsed(elapsed))
        });
        let read = read_line(input);
        ticker.cancel();
        println!();

        let session = self.controller.stop()?;
        self.record(session);

        read.map(|_| ())
    }

    fn record(&mut self, session: Session) {
        info(format!(
            "Stopped '{}' at {} after {}.",
            session.project,
            colorize_in_out(&session.end_label(), false),
            session.duration_label()
        ));

        match persist(&session, self.log_dir.as_deref()) {
            Ok(path) => {
                success(format!("Logged to {}", path.display()));
                self.note_activity(&session);
            }
            Err(AppError::NoLogDirectory) => {
                warning("Session not saved: no log directory configured.");
            }
            Err(e) => {
                error(e);
            }
        }

        self.completed.push(session);
        self.print_completed();
    }

    fn note_activity(&self, session: &Session) {
        let Some(path) = &self.activity_log else {
            return;
        };
        let message = format!(
            "{} - {} ({})",
            session.start_label(),
            session.end_label(),
            session.duration_label()
        );
        if let Err(e) = ttlog(path, "track", &session.project, &message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    fn print_completed(&self) {
        header("Today's sessions");
        print!("{}", render_sessions(&self.completed));

        let total: i64 = self.completed.iter().map(Session::duration_minutes).sum();
        println!(
            "\nTotal: {}\n",
            colorize(&format!("{}m", total), color_for_minutes(total))
        );
    }
}

/// Plain-text table of completed sessions.
pub fn render_sessions(sessions: &[Session]) -> String {
    let mut table = Table::new(vec![
        Column::new("Project"),
        Column::new("Start"),
        Column::new("End"),
        Column::new("Duration"),
    ]);
    for s in sessions {
        table.add_row(vec![
            s.project.clone(),
            s.start_label(),
            s.end_label(),
            s.duration_label(),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::markdown::HEADER_TITLES;
    use chrono::NaiveDate;
    use std::fs;
    use std::io::Cursor;

    fn quick(log_dir: Option<PathBuf>) -> TrackLogic {
        TrackLogic::new(log_dir).with_interval(StdDuration::from_millis(5))
    }

    #[test]
    fn each_started_project_logs_one_row() {
        let tmp = tempfile::tempdir().unwrap();
        let mut t = quick(Some(tmp.path().to_path_buf()));

        t.run(Cursor::new("Alpha\n\nBeta\n\nq\n"), None).unwrap();

        assert_eq!(t.completed().len(), 2);
        assert_eq!(t.completed()[0].project, "Alpha");
        assert_eq!(t.completed()[1].project, "Beta");

        let content = fs::read_to_string(tmp.path().join("Work Log.md")).unwrap();
        assert_eq!(content.lines().count(), 4);
        assert_eq!(content.matches(HEADER_TITLES).count(), 1);
        assert!(content.contains("| [[Alpha]] |"));
        assert!(content.contains("| [[Beta]] |"));
    }

    #[test]
    fn blank_project_does_not_start_timer() {
        let tmp = tempfile::tempdir().unwrap();
        let mut t = quick(Some(tmp.path().to_path_buf()));

        t.run(Cursor::new("   \n\nquit\n"), None).unwrap();

        assert!(t.completed().is_empty());
        assert!(!tmp.path().join("Work Log.md").exists());
    }

    #[test]
    fn first_project_skips_prompt_and_eof_stops() {
        let tmp = tempfile::tempdir().unwrap();
        let mut t = quick(Some(tmp.path().to_path_buf()));

        t.run(Cursor::new(""), Some("Gamma".into())).unwrap();

        assert_eq!(t.completed().len(), 1);
        let s = &t.completed()[0];
        assert!(s.end >= s.start);
        assert!(s.duration_minutes() >= 0);
    }

    #[test]
    fn missing_directory_keeps_session_on_screen() {
        let mut t = quick(None);

        t.run(Cursor::new("Alpha\n\n"), None).unwrap();

        assert_eq!(t.completed().len(), 1);
    }

    #[test]
    fn write_failure_does_not_stop_the_loop() {
        let tmp = tempfile::tempdir().unwrap();
        let mut t = quick(Some(tmp.path().join("missing")));

        t.run(Cursor::new("Alpha\n\nBeta\n\n"), None).unwrap();

        assert_eq!(t.completed().len(), 2);
    }

    #[test]
    fn persist_requires_directory() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        let at = d.and_hms_opt(9, 0, 0).unwrap();
        let s = Session::new("Alpha", at, at);
        assert!(matches!(persist(&s, None), Err(AppError::NoLogDirectory)));
    }

    #[test]
    fn sessions_table_lists_rows_in_order() {
        let d = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        let s1 = Session::new(
            "Alpha",
            d.and_hms_opt(9, 0, 0).unwrap(),
            d.and_hms_opt(9, 30, 0).unwrap(),
        );
        let s2 = Session::new(
            "Beta",
            d.and_hms_opt(10, 0, 0).unwrap(),
            d.and_hms_opt(10, 1, 0).unwrap(),
        );

        let out = render_sessions(&[s1, s2]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Project"));
        assert!(lines[2].starts_with("Alpha") && lines[2].ends_with("30m"));
        assert!(lines[3].starts_with("Beta") && lines[3].ends_with("1m"));
    }
}
