// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a column of toolbar, stage and progress bar, with open
//! overlays stacked on top. Toolbar and progress bar are hidden in
//! fullscreen.

use super::Message;
use crate::controller::{DeckController, Event};
use crate::i18n::fluent::I18n;
use crate::surface::ImageSurface;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::overlay::{self, help, overview, print, Overlay};
use crate::ui::theming::ColorScheme;
use crate::ui::{progress, stage, toolbar};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    /// Warning for the status line.
    pub status: Option<&'a str>,
}

/// Renders the presenter around a running controller.
pub fn view<'a>(
    ctx: ViewContext<'a>,
    controller: &'a DeckController<ImageSurface>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let navigation = controller.navigation();
    let fullscreen = controller.is_fullscreen();

    let stage = stage::view(
        stage::ViewContext {
            i18n,
            scheme: ctx.scheme,
        },
        stage::ViewModel {
            surface: controller.surface(),
            current: navigation.current(),
            highlighted: controller.highlighted(),
            slide_size: controller.slide_size(),
            available: controller.available_size(),
            strip: controller.strip_layout(),
            strip_padding: controller.strip_padding(),
        },
    );

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if fullscreen {
        column = column.push(stage);
    } else {
        let toolbar = toolbar::view(
            toolbar::ViewContext {
                i18n,
                bindings: controller.settings().bindings,
            },
            toolbar::ViewModel {
                current: navigation.current(),
                total: navigation.total(),
                jump: controller.jump(),
                zoom: controller.zoom(),
                fullscreen,
                status: ctx.status.map(str::to_string),
            },
        );
        column = column
            .push(toolbar)
            .push(stage)
            .push(progress::view(controller.progress(), ctx.scheme));
    }

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column);

    for open in controller.overlays().iter() {
        let panel = match open {
            Overlay::Help => help::view(help::ViewContext {
                i18n,
                bindings: controller.settings().bindings,
            }),
            Overlay::Overview => overview::view(
                overview::ViewContext { i18n },
                overview::ViewModel {
                    current: navigation.current(),
                    total: navigation.total(),
                },
            ),
            Overlay::Print => print::view(
                print::ViewContext { i18n },
                print::ViewModel {
                    pattern: print::file_pattern(controller.deck().source()),
                    total: navigation.total(),
                },
            ),
        };
        layers = layers.push(overlay::modal(open, ctx.scheme, panel));
    }

    Element::<'a, Event>::from(layers).map(Message::Deck)
}

/// Shown instead of the presenter when the deck cannot be opened.
pub fn view_error<'a>(i18n: &'a I18n, message: &'a str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("error-deck-title")).size(typography::TITLE))
        .push(Text::new(message).size(typography::BODY))
        .push(Text::new(i18n.tr("error-deck-hint")).size(typography::CAPTION));

    Container::new(content)
        .padding(spacing::LG)
        .center(Length::Fill)
        .into()
}
