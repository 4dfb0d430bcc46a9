// SPDX-License-Identifier: MPL-2.0
//! Presenter theme: light, dark, or whatever the system uses.

use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    ///
    /// `System` asks the desktop and assumes dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The explicit mode opposite to the one currently shown.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Colors the deck view draws with, on top of the Iced theme.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    /// Area around the slides.
    pub stage: Color,
    /// Border of the current slide in strip layouts.
    pub active_border: Color,
    /// Border of a slide highlighted by scrolling.
    pub highlight_border: Color,
    pub progress: Color,
    pub overlay_background: Color,
    pub error: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            stage: Color::from_rgb(0.93, 0.93, 0.94),
            active_border: Color::from_rgb(0.16, 0.45, 0.86),
            highlight_border: Color::from_rgb(0.55, 0.68, 0.90),
            progress: Color::from_rgb(0.16, 0.45, 0.86),
            overlay_background: Color::from_rgba(0.0, 0.0, 0.0, 0.55),
            error: Color::from_rgb(0.80, 0.16, 0.16),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            stage: Color::from_rgb(0.08, 0.08, 0.09),
            active_border: Color::from_rgb(0.38, 0.62, 0.98),
            highlight_border: Color::from_rgb(0.30, 0.40, 0.58),
            progress: Color::from_rgb(0.38, 0.62, 0.98),
            overlay_background: Color::from_rgba(0.0, 0.0, 0.0, 0.75),
            error: Color::from_rgb(0.95, 0.35, 0.35),
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_toggle_to_each_other() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn system_mode_toggles_to_an_explicit_mode() {
        assert_ne!(ThemeMode::System.toggled(), ThemeMode::System);
    }

    #[test]
    fn schemes_follow_mode() {
        assert!(ColorScheme::for_mode(ThemeMode::Light).stage.r > 0.9);
        assert!(ColorScheme::for_mode(ThemeMode::Dark).stage.r < 0.2);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }
}
