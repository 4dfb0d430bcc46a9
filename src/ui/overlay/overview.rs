// SPDX-License-Identifier: MPL-2.0
//! Overview grid: one numbered tile per slide.

use super::{panel, Overlay};
use crate::controller::Event;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// Tiles per grid row.
pub const COLUMNS: usize = 6;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub struct ViewModel {
    pub current: usize,
    pub total: usize,
}

/// Slide numbers grouped into rows of [`COLUMNS`].
#[must_use]
pub fn grid_rows(total: usize) -> Vec<Vec<usize>> {
    (1..=total)
        .collect::<Vec<_>>()
        .chunks(COLUMNS)
        .map(<[usize]>::to_vec)
        .collect()
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel) -> Element<'a, Event> {
    let mut grid = Column::new().spacing(spacing::XS);

    for row in grid_rows(model.total) {
        let tiles = row.into_iter().map(|number| {
            let style = if number == model.current {
                button::primary
            } else {
                button::secondary
            };
            button(
                Text::new(number.to_string())
                    .size(typography::BODY)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            )
            .width(Length::Fixed(sizing::OVERVIEW_TILE))
            .height(Length::Fixed(sizing::OVERVIEW_TILE))
            .on_press(Event::OverviewSelected(number))
            .style(style)
            .into()
        });
        grid = grid.push(Row::with_children(tiles).spacing(spacing::XS));
    }

    panel(
        Overlay::Overview,
        ctx.i18n.tr_with_args("overview-title", &[("total", &model.total.to_string())]),
        ctx.i18n.tr("overlay-close"),
        grid.into(),
    )
}
