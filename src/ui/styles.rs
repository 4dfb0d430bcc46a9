// SPDX-License-Identifier: MPL-2.0
//! Container styles for the presenter chrome and the slide frames.

use crate::ui::design_tokens::radius;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toolbar strip, derived from the theme background.
#[must_use]
pub fn toolbar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        ..Default::default()
    }
}

/// Panel surface of the overlays.
#[must_use]
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Dimmed layer behind an open overlay.
pub fn backdrop(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.overlay_background)),
        ..Default::default()
    }
}

/// Area around the slides.
pub fn stage(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.stage)),
        ..Default::default()
    }
}

/// Frame of one slide. A zero `width` draws no border.
pub fn slide_frame(color: Color, width: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            radius: 0.0.into(),
            width,
            color,
        },
        ..Default::default()
    }
}

/// Filled part of the progress bar.
pub fn progress_fill(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.progress)),
        ..Default::default()
    }
}

/// Error text shown in place of a slide that failed to load.
pub fn error_text(scheme: ColorScheme) -> impl Fn(&Theme) -> iced::widget::text::Style {
    move |_theme: &Theme| iced::widget::text::Style {
        color: Some(scheme.error),
    }
}
