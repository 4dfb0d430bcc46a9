// SPDX-License-Identifier: MPL-2.0
//! Thin progress bar under the slides.

use crate::config::PROGRESS_BAR_HEIGHT;
use crate::controller::Event;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Container, Row, Space};
use iced::{Element, Length};

/// Resolution of the bar, in portions of the full width.
const PORTIONS: u16 = 1000;

/// Splits the bar into filled and empty portions for `fraction`.
#[must_use]
pub fn portions(fraction: f32) -> (u16, u16) {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * f32::from(PORTIONS)).round() as u16;
    (filled, PORTIONS - filled)
}

pub fn view<'a>(fraction: f32, scheme: ColorScheme) -> Element<'a, Event> {
    let (filled, empty) = portions(fraction);
    let height = Length::Fixed(PROGRESS_BAR_HEIGHT);

    let mut bar = Row::new().width(Length::Fill).height(height);
    if filled > 0 {
        bar = bar.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(height)
                .style(styles::progress_fill(scheme)),
        );
    }
    if empty > 0 {
        bar = bar.push(Space::new().width(Length::FillPortion(empty)).height(height));
    }

    Container::new(bar)
        .width(Length::Fill)
        .height(height)
        .style(styles::stage(scheme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portions_cover_the_whole_bar() {
        for fraction in [0.0, 0.25, 1.0 / 3.0, 0.5, 1.0] {
            let (filled, empty) = portions(fraction);
            assert_eq!(filled + empty, PORTIONS);
        }
    }

    #[test]
    fn seventh_of_fifteen_fills_three_sevenths() {
        let (filled, _) = portions(6.0 / 14.0);
        assert_eq!(filled, 429);
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(portions(-0.5), (0, PORTIONS));
        assert_eq!(portions(1.5), (PORTIONS, 0));
        assert_eq!(portions(f32::NAN), (0, PORTIONS));
    }
}
