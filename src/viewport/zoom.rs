// SPDX-License-Identifier: MPL-2.0
//! Presenter zoom applied on top of the fit scale.
//!
//! The fit scale keeps the design resolution inside the window; the zoom
//! percentage multiplies it so the presenter can enlarge a detail or shrink
//! the slide. Both newtypes clamp on construction.

pub use crate::config::{
    DEFAULT_ZOOM_PERCENT, DEFAULT_ZOOM_STEP_PERCENT, MAX_ZOOM_PERCENT, MAX_ZOOM_STEP_PERCENT,
    MIN_ZOOM_PERCENT, MIN_ZOOM_STEP_PERCENT,
};

/// Zoom percentage, always within 50%–200%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPercent(f32);

impl ZoomPercent {
    /// Creates a zoom percentage, clamping to the valid range.
    ///
    /// NaN falls back to the default percentage.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a multiplier (e.g., 150% → 1.5).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_PERCENT
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_PERCENT
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_PERCENT)
    }
}

/// Zoom step, always within 1%–50%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(MIN_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP_PERCENT)
    }
}

/// Zoom level and step of the session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomState {
    percent: ZoomPercent,
    step: ZoomStep,
}

impl ZoomState {
    #[must_use]
    pub fn with_step(step: ZoomStep) -> Self {
        Self {
            percent: ZoomPercent::default(),
            step,
        }
    }

    #[must_use]
    pub fn percent(&self) -> ZoomPercent {
        self.percent
    }

    #[must_use]
    pub fn step(&self) -> ZoomStep {
        self.step
    }

    #[must_use]
    pub fn factor(&self) -> f32 {
        self.percent.as_factor()
    }

    /// Sets the zoom, returning whether it changed.
    pub fn set_percent(&mut self, percent: f32) -> bool {
        let next = ZoomPercent::new(percent);
        let changed = next != self.percent;
        self.percent = next;
        changed
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_percent(self.percent.value() + self.step.value())
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_percent(self.percent.value() - self.step.value())
    }

    pub fn reset(&mut self) -> bool {
        self.set_percent(DEFAULT_ZOOM_PERCENT)
    }

    /// Label shown next to the zoom slider, e.g. `"110%"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", format_number(self.percent.value()))
    }
}

/// Formats a number for display without a trailing `.0`.
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn percent_clamps_to_presenter_range() {
        assert_abs_diff_eq!(ZoomPercent::new(10.0).value(), MIN_ZOOM_PERCENT);
        assert_abs_diff_eq!(ZoomPercent::new(900.0).value(), MAX_ZOOM_PERCENT);
        assert_abs_diff_eq!(ZoomPercent::new(f32::NAN).value(), DEFAULT_ZOOM_PERCENT);
        assert!(ZoomPercent::new(50.0).is_min());
        assert!(ZoomPercent::new(200.0).is_max());
    }

    #[test]
    fn step_clamps() {
        assert_abs_diff_eq!(ZoomStep::new(0.0).value(), MIN_ZOOM_STEP_PERCENT);
        assert_abs_diff_eq!(ZoomStep::new(75.0).value(), MAX_ZOOM_STEP_PERCENT);
    }

    #[test]
    fn zoom_in_stops_at_maximum() {
        let mut zoom = ZoomState::with_step(ZoomStep::new(50.0));
        assert!(zoom.zoom_in());
        assert!(zoom.zoom_in());
        assert!(!zoom.zoom_in());
        assert_abs_diff_eq!(zoom.factor(), 2.0);
    }

    #[test]
    fn zoom_out_then_reset() {
        let mut zoom = ZoomState::default();
        zoom.zoom_out();
        assert_eq!(zoom.label(), "90%");
        assert!(zoom.reset());
        assert!(!zoom.reset());
        assert_eq!(zoom.label(), "100%");
    }

    #[test]
    fn format_number_trims_decimals() {
        assert_eq!(format_number(110.0), "110");
        assert_eq!(format_number(112.5), "112.5");
    }
}
