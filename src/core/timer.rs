use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::utils::date::now;
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Idle,
    Running {
        project: String,
        started_at: NaiveDateTime,
    },
}

/// Two-state work timer. Only one session can run at a time.
#[derive(Debug, Default)]
pub struct TimerController {
    state: TimerState,
}

impl TimerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn project(&self) -> Option<&str> {
        match &self.state {
            TimerState::Running { project, .. } => Some(project),
            TimerState::Idle => None,
        }
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        match &self.state {
            TimerState::Running { started_at, .. } => Some(*started_at),
            TimerState::Idle => None,
        }
    }

    pub fn start(&mut self, project: &str) -> AppResult<()> {
        self.start_at(project, now())
    }

    /// Start timing `project` at `at`.
    /// Blank labels and a second start while running leave the state untouched.
    pub fn start_at(&mut self, project: &str, at: NaiveDateTime) -> AppResult<()> {
        if let TimerState::Running { project, .. } = &self.state {
            return Err(AppError::AlreadyRunning(project.clone()));
        }

        let project = project.trim();
        if project.is_empty() {
            return Err(AppError::EmptyProject);
        }

        self.state = TimerState::Running {
            project: project.to_string(),
            started_at: at,
        };
        Ok(())
    }

    pub fn stop(&mut self) -> AppResult<Session> {
        self.stop_at(now())
    }

    /// Stop at `at` and hand back the completed session.
    /// The controller is idle again afterwards, with no project label.
    pub fn stop_at(&mut self, at: NaiveDateTime) -> AppResult<Session> {
        match std::mem::take(&mut self.state) {
            TimerState::Running {
                project,
                started_at,
            } => Ok(Session::new(project, started_at, at)),
            TimerState::Idle => Err(AppError::NotRunning),
        }
    }

    /// Elapsed time at `at`, clamped to zero. `None` while idle.
    pub fn elapsed_at(&self, at: NaiveDateTime) -> Option<Duration> {
        self.started_at()
            .map(|start| (at - start).max(Duration::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 18)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn start_then_stop_produces_session() {
        let mut t = TimerController::new();
        t.start_at("  Alpha ", at(9, 0, 0)).unwrap();
        assert!(t.is_running());
        assert_eq!(t.project(), Some("Alpha"));

        let s = t.stop_at(at(9, 30, 0)).unwrap();
        assert_eq!(s.project, "Alpha");
        assert_eq!(s.duration_minutes(), 30);
        assert!(s.end >= s.start);

        assert_eq!(t.state(), &TimerState::Idle);
        assert_eq!(t.project(), None);
    }

    #[test]
    fn blank_project_is_rejected() {
        let mut t = TimerController::new();
        for label in ["", "   ", "\t\n"] {
            assert!(matches!(
                t.start_at(label, at(9, 0, 0)),
                Err(AppError::EmptyProject)
            ));
            assert_eq!(t.state(), &TimerState::Idle);
        }
    }

    #[test]
    fn second_start_is_blocked() {
        let mut t = TimerController::new();
        t.start_at("Alpha", at(9, 0, 0)).unwrap();

        let err = t.start_at("Beta", at(9, 5, 0)).unwrap_err();
        assert!(matches!(err, AppError::AlreadyRunning(ref p) if p == "Alpha"));
        assert_eq!(t.started_at(), Some(at(9, 0, 0)));
        assert_eq!(t.project(), Some("Alpha"));
    }

    #[test]
    fn stop_while_idle_fails() {
        let mut t = TimerController::new();
        assert!(matches!(t.stop_at(at(9, 0, 0)), Err(AppError::NotRunning)));
    }

    #[test]
    fn clock_going_backwards_never_yields_negative_time() {
        let mut t = TimerController::new();
        t.start_at("Alpha", at(9, 0, 0)).unwrap();
        assert_eq!(t.elapsed_at(at(8, 59, 0)), Some(Duration::zero()));

        let s = t.stop_at(at(8, 0, 0)).unwrap();
        assert_eq!(s.duration_minutes(), 0);
        assert_eq!(s.end, s.start);
    }

    #[test]
    fn elapsed_is_none_when_idle() {
        let t = TimerController::new();
        assert_eq!(t.elapsed_at(at(9, 0, 0)), None);
    }
}
