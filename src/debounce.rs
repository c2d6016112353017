//! Trailing-edge debouncer
//!
//! Holds at most one pending unit of work behind a timer. Scheduling again
//! before the timer fires replaces both the timer and the work, so a burst
//! of schedules yields only the last one. Time is passed in explicitly: the
//! caller's event loop asks [`Debouncer::fire`] whether the timer is due, and
//! tests drive it with synthetic `Instant`s.

use std::time::{Duration, Instant};

/// Default quiet period before scheduled work runs
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug)]
struct Pending<W> {
    deadline: Instant,
    work: W,
}

/// Timer handle owning the single pending unit of work
#[derive(Debug)]
pub struct Debouncer<W> {
    delay: Duration,
    pending: Option<Pending<W>>,
}

impl<W> Debouncer<W> {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Arm the timer for `work`, cancelling any earlier pending work
    pub fn schedule(&mut self, work: W, now: Instant) {
        self.pending = Some(Pending {
            deadline: now + self.delay,
            work,
        });
    }

    /// Drop the pending work without running it
    pub fn cancel(&mut self) -> Option<W> {
        self.pending.take().map(|p| p.work)
    }

    /// Take the pending work if its timer has elapsed at `now`
    ///
    /// Returns `None` while the timer is still running or nothing is armed.
    pub fn fire(&mut self, now: Instant) -> Option<W> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.work)
        } else {
            None
        }
    }

    /// Time left until the pending work is due, if any is armed
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Whether work is currently armed
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Configured quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl<W> Default for Debouncer<W> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
