// SPDX-License-Identifier: MPL-2.0
//! Toolbar above the deck: navigation, jump field, zoom and extras.

use crate::config::{MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT, TOOLBAR_HEIGHT};
use crate::controller::Event;
use crate::deck::jump::JumpInput;
use crate::i18n::fluent::I18n;
use crate::input::{Action, KeyBindings};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::viewport::ZoomState;
use iced::alignment::Vertical;
use iced::widget::{
    button, slider, text, text_input, tooltip, Container, Id, Row, Space, Text,
};
use iced::{Element, Length};

/// Identifier of the jump text field.
pub const JUMP_INPUT_ID: &str = "deck-jump-input";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub bindings: KeyBindings,
}

pub struct ViewModel<'a> {
    pub current: usize,
    pub total: usize,
    pub jump: &'a JumpInput,
    pub zoom: &'a ZoomState,
    pub fullscreen: bool,
    /// Warning shown at the end of the bar (config problems, bad start slide).
    pub status: Option<String>,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, Event> {
    let i18n = ctx.i18n;
    let first = model.current <= 1;
    let last = model.current >= model.total;

    let previous = nav_button(
        "◀",
        i18n.tr("toolbar-previous"),
        (!first).then_some(Event::Action(Action::Previous)),
    );
    let next = nav_button(
        "▶",
        i18n.tr("toolbar-next"),
        (!last).then_some(Event::Action(Action::Next)),
    );

    let counter = Text::new(i18n.tr_with_args(
        "slide-counter",
        &[
            ("current", &model.current.to_string()),
            ("total", &model.total.to_string()),
        ],
    ))
    .size(typography::BODY);

    let jump = text_input(&i18n.tr("jump-input-placeholder"), &model.jump.value)
        .id(Id::new(JUMP_INPUT_ID))
        .on_input(Event::JumpChanged)
        .on_submit(Event::JumpSubmitted)
        .width(Length::Fixed(sizing::JUMP_INPUT_WIDTH))
        .size(typography::BODY);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XXS, spacing::SM])
        .align_y(Vertical::Center)
        .push(previous)
        .push(counter)
        .push(next)
        .push(jump);

    if let Some(key) = model.jump.error_key {
        row = row.push(
            Text::new(i18n.tr(key))
                .size(typography::CAPTION)
                .style(text::danger),
        );
    }

    row = row.push(Space::new().width(Length::Fill));

    if let Some(status) = model.status {
        row = row.push(
            Text::new(status)
                .size(typography::CAPTION)
                .style(text::warning),
        );
    }

    if ctx.bindings.zoom {
        let zoom = model.zoom;
        row = row
            .push(small_button("−", Event::Action(Action::ZoomOut)))
            .push(
                slider(
                    MIN_ZOOM_PERCENT..=MAX_ZOOM_PERCENT,
                    zoom.percent().value(),
                    Event::ZoomChanged,
                )
                .step(zoom.step().value())
                .width(Length::Fixed(sizing::ZOOM_SLIDER_WIDTH)),
            )
            .push(small_button("+", Event::Action(Action::ZoomIn)))
            .push(
                button(Text::new(zoom.label()).size(typography::CAPTION))
                    .on_press(Event::Action(Action::ZoomReset))
                    .style(button::text),
            );
    }

    if ctx.bindings.overview {
        row = row.push(labelled_button(
            i18n.tr("toolbar-overview"),
            Event::Action(Action::ToggleOverview),
        ));
    }
    if ctx.bindings.print {
        row = row.push(labelled_button(
            i18n.tr("toolbar-print"),
            Event::Action(Action::TogglePrint),
        ));
    }
    if ctx.bindings.theme {
        row = row.push(labelled_button(
            i18n.tr("toolbar-theme"),
            Event::Action(Action::ToggleTheme),
        ));
    }
    if ctx.bindings.help {
        row = row.push(small_button("?", Event::Action(Action::ToggleHelp)));
    }

    let fullscreen_key = if model.fullscreen {
        "toolbar-exit-fullscreen"
    } else {
        "toolbar-fullscreen"
    };
    row = row.push(labelled_button(
        i18n.tr(fullscreen_key),
        Event::Action(Action::ToggleFullscreen),
    ));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(TOOLBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::toolbar)
        .into()
}

fn nav_button<'a>(glyph: &'a str, label: String, on_press: Option<Event>) -> Element<'a, Event> {
    let content = button(Text::new(glyph).size(typography::BODY)).on_press_maybe(on_press);
    tooltip(
        content,
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .gap(4)
    .into()
}

fn small_button(glyph: &str, event: Event) -> Element<'_, Event> {
    button(Text::new(glyph).size(typography::BODY))
        .on_press(event)
        .style(button::secondary)
        .into()
}

fn labelled_button<'a>(label: String, event: Event) -> Element<'a, Event> {
    button(Text::new(label).size(typography::CAPTION))
        .on_press(event)
        .style(button::secondary)
        .into()
}
