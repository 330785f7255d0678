//! Cancellable single-shot scheduled tasks
//!
//! A `ScheduledTask` is a deadline plus an optional payload. It does not own a
//! thread or a timer: the owner drives it by calling `take_due(now)` from its
//! tick, which keeps every timing decision deterministic under test.

use std::time::{Duration, Instant};

/// A single-shot delayed action that can be reset or cancelled before it fires
#[derive(Debug, Clone)]
pub struct ScheduledTask<T> {
    delay: Duration,
    deadline: Option<Instant>,
    payload: Option<T>,
}

impl<T> ScheduledTask<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            payload: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the task to fire `delay` after `now`
    ///
    /// Rescheduling a pending task discards the previous fire and payload.
    pub fn schedule(&mut self, now: Instant, payload: T) {
        self.deadline = Some(now + self.delay);
        self.payload = Some(payload);
    }

    /// Drop the pending fire, if any. Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.payload = None;
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the task fires, or None when nothing is scheduled
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fire the task if its deadline has passed
    ///
    /// Returns the payload exactly once; the task is unscheduled afterwards.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.payload.take()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
