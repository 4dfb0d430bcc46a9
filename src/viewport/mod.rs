// SPDX-License-Identifier: MPL-2.0
//! Viewport geometry: fitting, zooming and centering slides.

pub mod center;
pub mod fit;
pub mod zoom;

pub use center::{closest_to_center, Axis, StripLayout};
pub use fit::{centering_padding, fit_scale, FitMode, ViewportFit};
pub use zoom::{ZoomPercent, ZoomState, ZoomStep};
