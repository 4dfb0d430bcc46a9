// SPDX-License-Identifier: MPL-2.0
//! Modal overlays drawn above the deck.

pub mod help;
pub mod overview;
pub mod print;

use crate::controller::Event;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, mouse_area, opaque, scrollable, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length};

/// Overlays the presenter can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Overview,
    Print,
}

/// Open overlays, bottom to top. Each overlay appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayStack {
    open: Vec<Overlay>,
}

impl OverlayStack {
    /// Opens `overlay`, or raises it to the top if already open.
    pub fn open(&mut self, overlay: Overlay) {
        self.open.retain(|o| *o != overlay);
        self.open.push(overlay);
    }

    /// Closes `overlay` if open, opens it otherwise. Returns whether it is now open.
    pub fn toggle(&mut self, overlay: Overlay) -> bool {
        if self.is_open(overlay) {
            self.close(overlay);
            false
        } else {
            self.open.push(overlay);
            true
        }
    }

    pub fn close(&mut self, overlay: Overlay) {
        self.open.retain(|o| *o != overlay);
    }

    /// Closes and returns the topmost overlay.
    pub fn close_top(&mut self) -> Option<Overlay> {
        self.open.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<Overlay> {
        self.open.last().copied()
    }

    #[must_use]
    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.open.contains(&overlay)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Open overlays from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = Overlay> + '_ {
        self.open.iter().copied()
    }
}

/// Panel with a title bar and a close button, shared by every overlay.
pub(crate) fn panel<'a>(
    overlay: Overlay,
    title: String,
    close_label: String,
    body: Element<'a, Event>,
) -> Element<'a, Event> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(title).size(typography::TITLE).font(Font {
                weight: Weight::Bold,
                ..Font::default()
            }),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(close_label).size(typography::CAPTION))
                .on_press(Event::CloseOverlay(overlay))
                .style(button::secondary),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(scrollable(body).height(Length::Shrink));

    Container::new(content)
        .width(Length::Fixed(sizing::OVERLAY_WIDTH))
        .max_height(600.0)
        .padding(spacing::LG)
        .style(styles::panel)
        .into()
}

/// Centers `panel` over a dimmed backdrop. Clicking the backdrop closes `overlay`.
pub(crate) fn modal<'a>(
    overlay: Overlay,
    scheme: ColorScheme,
    panel: Element<'a, Event>,
) -> Element<'a, Event> {
    let backdrop = Container::new(opaque(panel))
        .center(Length::Fill)
        .style(styles::backdrop(scheme));

    opaque(mouse_area(backdrop).on_press(Event::CloseOverlay(overlay)))
}
