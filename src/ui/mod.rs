// SPDX-License-Identifier: MPL-2.0
//! User interface views.
//!
//! Views follow the "state down, messages up" pattern: each takes a
//! `ViewContext` (shared services such as translations) and a `ViewModel`
//! (the data to draw), and emits [`crate::controller::Event`]s.
//!
//! - [`toolbar`] - Navigation buttons, slide counter, jump field, zoom
//! - [`stage`] - The current slide or the scrollable strip of slides
//! - [`progress`] - Progress bar under the slides
//! - [`overlay`] - Help, overview and print overlays
//! - [`styles`] - Container styles
//! - [`design_tokens`] - Spacing, sizing and typography constants
//! - [`theming`] - Light/Dark/System theme mode and deck colors

pub mod design_tokens;
pub mod overlay;
pub mod progress;
pub mod stage;
pub mod styles;
pub mod theming;
pub mod toolbar;
