// SPDX-License-Identifier: MPL-2.0
//! Keyboard and gesture reference.

use super::{panel, Overlay};
use crate::controller::Event;
use crate::i18n::fluent::I18n;
use crate::input::KeyBindings;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{Border, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub bindings: KeyBindings,
}

/// Shortcut rows as (keys, i18n key of the description), honoring disabled bindings.
#[must_use]
pub fn shortcuts(bindings: KeyBindings) -> Vec<(&'static str, &'static str)> {
    let mut rows = vec![
        ("← ↑ PgUp", "help-key-previous"),
        ("→ ↓ PgDn Space", "help-key-next"),
        ("Home", "help-key-first"),
        ("End", "help-key-last"),
        ("F / F11", "help-key-fullscreen"),
        ("Esc", "help-key-escape"),
    ];
    if bindings.theme {
        rows.push(("T", "help-key-theme"));
    }
    if bindings.overview {
        rows.push(("O", "help-key-overview"));
    }
    if bindings.print {
        rows.push(("P", "help-key-print"));
    }
    if bindings.help {
        rows.push(("?", "help-key-help"));
    }
    if bindings.zoom {
        rows.push(("+ / - / 0", "help-key-zoom"));
    }
    rows
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Event> {
    let i18n = ctx.i18n;

    let mut body = Column::new().spacing(spacing::XS);
    for (keys, description) in shortcuts(ctx.bindings) {
        body = body.push(shortcut_row(keys, i18n.tr(description)));
    }
    body = body
        .push(Text::new(i18n.tr("help-gestures-title")).size(typography::BODY))
        .push(shortcut_row("⇆", i18n.tr("help-gesture-swipe")))
        .push(shortcut_row("⊙", i18n.tr("help-gesture-click")));

    panel(
        Overlay::Help,
        i18n.tr("help-title"),
        i18n.tr("overlay-close"),
        body.into(),
    )
}

fn shortcut_row<'a>(keys: &'a str, description: String) -> Element<'a, Event> {
    let badge = Container::new(Text::new(keys).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(badge).width(Length::Fixed(130.0)))
        .push(Text::new(description).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_bindings_are_not_listed() {
        let bindings = KeyBindings {
            theme: false,
            zoom: false,
            ..KeyBindings::default()
        };
        let rows = shortcuts(bindings);
        assert!(rows.iter().all(|(_, key)| *key != "help-key-theme"));
        assert!(rows.iter().all(|(_, key)| *key != "help-key-zoom"));
        assert!(rows.iter().any(|(_, key)| *key == "help-key-overview"));
    }

    #[test]
    fn every_shortcut_is_translated() {
        let i18n = I18n::new(Some("en-US".into()), None, &crate::config::Config::default());
        for (_, key) in shortcuts(KeyBindings::default()) {
            assert!(!i18n.tr(key).starts_with("MISSING"), "{key} is missing");
        }
    }

    #[test]
    fn help_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            bindings: KeyBindings::default(),
        });
    }
}
