// SPDX-License-Identifier: MPL-2.0
//! Viewport fit: the uniform scale that makes a fixed design resolution fit
//! into the space currently available.

use iced::{Padding, Size};
use serde::{Deserialize, Serialize};

/// Which dimensions the design resolution must fit into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Whole slide visible: `min(aw / dw, ah / dh)`.
    #[default]
    Contain,
    /// Slide width matches the available width.
    Width,
    /// Slide height matches the available height.
    Height,
    /// Design resolution, unscaled.
    Actual,
}

/// Computes the scale factor for `design` inside `available`.
///
/// Negative available dimensions count as zero. A design size without area
/// yields `1.0`. With `allow_upscale == false` the result never exceeds `1.0`.
#[must_use]
pub fn fit_scale(design: Size, available: Size, mode: FitMode, allow_upscale: bool) -> f32 {
    if !(design.width > 0.0 && design.height > 0.0) {
        return 1.0;
    }

    let scale_x = available.width.max(0.0) / design.width;
    let scale_y = available.height.max(0.0) / design.height;

    let scale = match mode {
        FitMode::Contain => scale_x.min(scale_y),
        FitMode::Width => scale_x,
        FitMode::Height => scale_y,
        FitMode::Actual => 1.0,
    };

    let scale = if scale.is_finite() { scale } else { 1.0 };

    if allow_upscale {
        scale
    } else {
        scale.min(1.0)
    }
}

/// Padding that centers `content` inside `available`.
#[must_use]
pub fn centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

/// Fit policy of a session: design resolution, mode and upscale rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    design: Size,
    mode: FitMode,
    allow_upscale: bool,
}

impl ViewportFit {
    #[must_use]
    pub fn new(design: Size, mode: FitMode, allow_upscale: bool) -> Self {
        Self {
            design,
            mode,
            allow_upscale,
        }
    }

    #[must_use]
    pub fn design(&self) -> Size {
        self.design
    }

    #[must_use]
    pub fn mode(&self) -> FitMode {
        self.mode
    }

    #[must_use]
    pub fn scale_for(&self, available: Size) -> f32 {
        fit_scale(self.design, available, self.mode, self.allow_upscale)
    }

    /// Design size multiplied by `scale`.
    #[must_use]
    pub fn scaled_design(&self, scale: f32) -> Size {
        Size::new(self.design.width * scale, self.design.height * scale)
    }
}
