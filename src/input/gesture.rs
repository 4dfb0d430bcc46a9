// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe recognition for touch screens.

use crate::config::{DEFAULT_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX, MIN_SWIPE_THRESHOLD_PX};
use iced::touch::Finger;

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right to left.
    Next,
    /// Finger moved left to right.
    Previous,
}

/// Tracks one finger from press to lift.
///
/// Only the first finger pressed is followed; the gesture is dropped when
/// the touch is lost or a different finger is lifted.
#[derive(Debug, Clone)]
pub struct SwipeRecognizer {
    threshold: f32,
    start: Option<(Finger, f32)>,
}

impl SwipeRecognizer {
    /// Creates a recognizer; `threshold` is clamped to 10–400 px.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_SWIPE_THRESHOLD_PX
        } else {
            threshold.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
        };
        Self {
            threshold,
            start: None,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn finger_pressed(&mut self, finger: Finger, x: f32) {
        if self.start.is_none() {
            self.start = Some((finger, x));
        }
    }

    /// Completes the gesture. `|start - end|` must strictly exceed the threshold.
    pub fn finger_lifted(&mut self, finger: Finger, x: f32) -> Option<Swipe> {
        let (tracked, start_x) = self.start.take()?;
        if tracked != finger {
            return None;
        }

        let delta = start_x - x;
        if delta.abs() <= self.threshold {
            return None;
        }

        let swipe = if delta > 0.0 { Swipe::Next } else { Swipe::Previous };
        tracing::debug!(delta, ?swipe, "swipe recognized");
        Some(swipe)
    }

    pub fn finger_lost(&mut self) {
        self.start = None;
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}
