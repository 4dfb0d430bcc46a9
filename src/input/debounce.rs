// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing driven by explicit timestamps.
//!
//! Bursts of scroll or resize events each call [`Debouncer::schedule`]; the
//! app polls on a tick and the debouncer fires once the burst has been
//! quiet for the configured delay. Timestamps are passed in so tests never
//! sleep.

use crate::config::MAX_DEBOUNCE_MS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer; delays above one second are clamped.
    #[must_use]
    pub fn from_millis(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms.min(MAX_DEBOUNCE_MS)),
            deadline: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an event; the last event of a burst wins.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once per quiet period.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
