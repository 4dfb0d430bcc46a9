// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Deck**: Slide source and design resolution
//! - **Zoom**: Zoom percentage and step bounds
//! - **Input**: Swipe threshold and debounce delays
//! - **Layout**: Strip spacing and chrome sizes

// ==========================================================================
// Deck Defaults
// ==========================================================================

/// Path prefix prepended to the slide number.
pub const DEFAULT_BASE_PATH: &str = "slides/page_";

/// File extension of slide resources (without the dot).
pub const DEFAULT_EXTENSION: &str = "png";

/// Design width every slide is authored for.
pub const DEFAULT_DESIGN_WIDTH: f32 = 1280.0;

/// Design height every slide is authored for.
pub const DEFAULT_DESIGN_HEIGHT: f32 = 720.0;

/// Upper bound on slides probed when the deck size is discovered.
pub const MAX_DISCOVERED_SLIDES: usize = 999;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default zoom level (100% = fitted size).
pub const DEFAULT_ZOOM_PERCENT: f32 = 100.0;

/// Minimum allowed zoom percentage.
pub const MIN_ZOOM_PERCENT: f32 = 50.0;

/// Maximum allowed zoom percentage.
pub const MAX_ZOOM_PERCENT: f32 = 200.0;

/// Default zoom step for zoom in/out operations.
pub const DEFAULT_ZOOM_STEP_PERCENT: f32 = 10.0;

/// Minimum allowed zoom step percentage.
pub const MIN_ZOOM_STEP_PERCENT: f32 = 1.0;

/// Maximum allowed zoom step percentage.
pub const MAX_ZOOM_STEP_PERCENT: f32 = 50.0;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Horizontal travel (logical pixels) a swipe must exceed to navigate.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum configurable swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum configurable swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Quiet period before the scroll position is resolved to a slide.
pub const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 150;

/// Quiet period before the current slide is re-centered after a resize.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;

/// Longest accepted debounce delay.
pub const MAX_DEBOUNCE_MS: u64 = 1000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Gap between slides in strip layouts.
pub const STRIP_GAP: f32 = 24.0;

/// Strip padding in windowed mode.
pub const STRIP_PADDING_WINDOWED: f32 = 20.0;

/// Strip padding in fullscreen mode.
pub const STRIP_PADDING_FULLSCREEN: f32 = 40.0;

/// Height of the toolbar shown above the slides in windowed mode.
pub const TOOLBAR_HEIGHT: f32 = 48.0;

/// Height of the progress bar under the toolbar.
pub const PROGRESS_BAR_HEIGHT: f32 = 4.0;

// ==========================================================================
// Slide Cache Defaults
// ==========================================================================

/// Number of decoded slides kept around in single-slide layout.
pub const DEFAULT_CACHED_SLIDES: usize = 8;

/// Neighbours loaded ahead of time in each direction.
pub const DEFAULT_PREFETCH_COUNT: usize = 1;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DESIGN_WIDTH > 0.0);
    assert!(DEFAULT_DESIGN_HEIGHT > 0.0);

    assert!(MIN_ZOOM_PERCENT > 0.0);
    assert!(MIN_ZOOM_PERCENT < DEFAULT_ZOOM_PERCENT);
    assert!(MAX_ZOOM_PERCENT > DEFAULT_ZOOM_PERCENT);
    assert!(MIN_ZOOM_STEP_PERCENT > 0.0);
    assert!(MAX_ZOOM_STEP_PERCENT > MIN_ZOOM_STEP_PERCENT);
    assert!(DEFAULT_ZOOM_STEP_PERCENT >= MIN_ZOOM_STEP_PERCENT);
    assert!(DEFAULT_ZOOM_STEP_PERCENT <= MAX_ZOOM_STEP_PERCENT);

    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    assert!(DEFAULT_SCROLL_DEBOUNCE_MS <= MAX_DEBOUNCE_MS);
    assert!(DEFAULT_RESIZE_DEBOUNCE_MS <= MAX_DEBOUNCE_MS);

    assert!(DEFAULT_CACHED_SLIDES > 2 * DEFAULT_PREFETCH_COUNT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_resolution_is_720p() {
        assert_eq!(DEFAULT_DESIGN_WIDTH, 1280.0);
        assert_eq!(DEFAULT_DESIGN_HEIGHT, 720.0);
    }

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(DEFAULT_ZOOM_PERCENT, 100.0);
        assert!(MIN_ZOOM_PERCENT < DEFAULT_ZOOM_PERCENT);
        assert!(MAX_ZOOM_PERCENT > DEFAULT_ZOOM_PERCENT);
    }

    #[test]
    fn swipe_threshold_defaults_to_fifty_pixels() {
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_PX, 50.0);
    }

    #[test]
    fn strip_padding_grows_in_fullscreen() {
        assert!(STRIP_PADDING_FULLSCREEN > STRIP_PADDING_WINDOWED);
    }
}
