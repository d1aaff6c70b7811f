//! Repeating display tick for a running timer.

use crate::utils::date::now;
use chrono::{Duration, NaiveDateTime};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration as StdDuration;

pub const DEFAULT_INTERVAL: StdDuration = StdDuration::from_secs(1);

/// Background thread that recomputes elapsed time from a start timestamp and
/// hands it to a render callback once per interval.
///
/// Rendered values never decrease, even if the wall clock steps backwards.
/// Cancelling (or dropping) the ticker joins the thread, so no tick is
/// rendered after `cancel` returns.
pub struct Ticker {
    cancel_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<R>(started_at: NaiveDateTime, interval: StdDuration, render: R) -> Self
    where
        R: FnMut(Duration) + Send + 'static,
    {
        Self::spawn_with_clock(started_at, interval, now, render)
    }

    pub fn spawn_with_clock<C, R>(
        started_at: NaiveDateTime,
        interval: StdDuration,
        clock: C,
        mut render: R,
    ) -> Self
    where
        C: Fn() -> NaiveDateTime + Send + 'static,
        R: FnMut(Duration) + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let mut shown = Duration::zero();
            loop {
                let elapsed = (clock() - started_at).max(shown);
                shown = elapsed;
                render(shown);

                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for the thread to finish.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            // The thread may already be gone; nothing to signal then.
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
