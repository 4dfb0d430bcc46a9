// SPDX-License-Identifier: MPL-2.0
//! Navigation state: the current slide and the transitions between slides.
//!
//! The current slide is always within `1..=total`. Every mutation goes
//! through [`NavigationState::go_to`], which ignores out-of-range requests
//! instead of clamping them, so keyboard, click, swipe, scroll and typed
//! input can never push the index outside the deck.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Formula used to turn the current slide into a progress fraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressMode {
    /// `(current - 1) / (total - 1)`: empty on the first slide, full on the last.
    #[default]
    Elapsed,
    /// `current / total`: one step is always shown as done.
    Position,
}

impl ProgressMode {
    /// Progress fraction in `0.0..=1.0` for slide `current` of `total`.
    #[must_use]
    pub fn fraction(self, current: usize, total: usize) -> f32 {
        if total == 0 {
            return 0.0;
        }
        match self {
            ProgressMode::Elapsed if total == 1 => 1.0,
            ProgressMode::Elapsed => current.saturating_sub(1) as f32 / (total - 1) as f32,
            ProgressMode::Position => current as f32 / total as f32,
        }
    }
}

/// A successful transition, handed to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub previous: usize,
    pub current: usize,
    pub total: usize,
}

impl SlideChange {
    /// True when the transition re-selected the slide that was already current.
    #[must_use]
    pub fn is_reload(&self) -> bool {
        self.previous == self.current
    }

    #[must_use]
    pub fn progress(&self, mode: ProgressMode) -> f32 {
        mode.fraction(self.current, self.total)
    }
}

/// Receives every successful slide transition.
pub trait NavigationListener {
    fn slide_changed(&mut self, change: &SlideChange);
}

/// Current slide and deck size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    total: NonZeroUsize,
}

impl NavigationState {
    /// Starts on the first slide.
    #[must_use]
    pub fn new(total: NonZeroUsize) -> Self {
        Self { current: 1, total }
    }

    /// Starts on `start`, or on the first slide if `start` is outside the deck.
    #[must_use]
    pub fn starting_at(total: NonZeroUsize, start: usize) -> Self {
        let mut state = Self::new(total);
        state.go_to(start);
        state
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total.get()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current == self.total()
    }

    /// Makes `number` the current slide.
    ///
    /// Returns `None` and leaves the state untouched when `number` is not in
    /// `1..=total`.
    pub fn go_to(&mut self, number: usize) -> Option<SlideChange> {
        if number < 1 || number > self.total() {
            return None;
        }
        let previous = self.current;
        self.current = number;
        Some(SlideChange {
            previous,
            current: number,
            total: self.total(),
        })
    }

    /// Advances one slide. No-op on the last slide.
    pub fn next(&mut self) -> Option<SlideChange> {
        if self.is_last() {
            return None;
        }
        self.go_to(self.current + 1)
    }

    /// Goes back one slide. No-op on the first slide.
    pub fn previous(&mut self) -> Option<SlideChange> {
        if self.is_first() {
            return None;
        }
        self.go_to(self.current - 1)
    }

    pub fn first(&mut self) -> Option<SlideChange> {
        self.go_to(1)
    }

    pub fn last(&mut self) -> Option<SlideChange> {
        self.go_to(self.total())
    }

    #[must_use]
    pub fn progress(&self, mode: ProgressMode) -> f32 {
        mode.fraction(self.current, self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn fifteen() -> NavigationState {
        NavigationState::new(NonZeroUsize::new(15).unwrap())
    }

    #[test]
    fn starts_on_first_slide() {
        let state = fifteen();
        assert_eq!(state.current(), 1);
        assert!(state.is_first());
        assert!(!state.is_last());
    }

    #[test]
    fn out_of_range_go_to_is_ignored() {
        let mut state = fifteen();
        state.go_to(4);
        for n in [0, 16, 100, usize::MAX] {
            assert!(state.go_to(n).is_none());
            assert_eq!(state.current(), 4);
        }
    }

    #[test]
    fn previous_on_first_slide_is_noop() {
        let mut state = fifteen();
        assert!(state.previous().is_none());
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn next_on_last_slide_is_noop() {
        let mut state = fifteen();
        state.go_to(15);
        assert!(state.next().is_none());
        assert_eq!(state.current(), 15);
    }

    #[test]
    fn repeated_go_to_reports_reload() {
        let mut state = fifteen();
        let first = state.go_to(7).unwrap();
        let second = state.go_to(7).unwrap();
        assert!(!first.is_reload());
        assert!(second.is_reload());
        assert_eq!(state.current(), 7);
    }

    #[test]
    fn first_and_last_jump_to_bounds() {
        let mut state = fifteen();
        assert_eq!(state.last().map(|c| c.current), Some(15));
        assert_eq!(state.first().map(|c| c.current), Some(1));
    }

    #[test]
    fn starting_at_out_of_range_keeps_first_slide() {
        let total = NonZeroUsize::new(3).unwrap();
        assert_eq!(NavigationState::starting_at(total, 2).current(), 2);
        assert_eq!(NavigationState::starting_at(total, 9).current(), 1);
    }

    #[test]
    fn elapsed_progress_on_slide_seven_of_fifteen() {
        let mut state = fifteen();
        state.go_to(7);
        assert_abs_diff_eq!(state.progress(ProgressMode::Elapsed), 6.0 / 14.0);
        assert_abs_diff_eq!(state.progress(ProgressMode::Position), 7.0 / 15.0);
    }

    #[test]
    fn single_slide_deck_is_complete() {
        let state = NavigationState::new(NonZeroUsize::new(1).unwrap());
        assert_abs_diff_eq!(state.progress(ProgressMode::Elapsed), 1.0);
        assert_abs_diff_eq!(state.progress(ProgressMode::Position), 1.0);
    }
}
