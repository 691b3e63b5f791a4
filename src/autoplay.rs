//! Autoplay — a cooperative, deadline-based interval.
//!
//! No background thread: the host's event loop calls [`Autoplay::poll`] with
//! the current instant, and a `true` return means "advance the lightbox
//! now". Driving the timer by polling keeps the engine single-threaded and
//! makes the firing schedule fully testable with synthetic instants.

use std::time::{Duration, Instant};
use tracing::debug;

/// Interval observed in the deployed galleries.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autoplay {
    interval: Duration,
    /// Next fire time while playing, `None` while stopped.
    deadline: Option<Instant>,
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn playing(&self) -> bool {
        self.deadline.is_some()
    }

    /// Start (or keep) playing. Idempotent: restarting while playing keeps
    /// the pending deadline rather than pushing it out.
    pub fn start(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
            debug!(interval_ms = self.interval.as_millis() as u64, "autoplay started");
        }
    }

    /// Stop playing. Idempotent.
    pub fn stop(&mut self) {
        if self.deadline.take().is_some() {
            debug!("autoplay stopped");
        }
    }

    /// At most one advance per poll; a fire reschedules from `now`, so a
    /// stalled host doesn't burst through queued intervals.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
