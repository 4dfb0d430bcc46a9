// SPDX-License-Identifier: MPL-2.0
//! Print instructions.
//!
//! Slides are plain image files, so printing happens outside the presenter.
//! The overlay tells the user where the files are and how to print them.

use super::{panel, Overlay};
use crate::controller::Event;
use crate::deck::SlideSource;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub struct ViewModel {
    /// Path pattern of the slide files, e.g. `slides/page_*.png`.
    pub pattern: String,
    pub total: usize,
}

/// Glob-style pattern matching every slide file of `source`.
#[must_use]
pub fn file_pattern(source: &SlideSource) -> String {
    format!("{}*.{}", source.base_path(), source.extension())
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel) -> Element<'a, Event> {
    let i18n = ctx.i18n;
    let total = model.total.to_string();

    let body = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(i18n.tr_with_args(
                "print-files",
                &[("pattern", &model.pattern), ("total", &total)],
            ))
            .size(typography::BODY),
        )
        .push(Text::new(i18n.tr("print-step-open")).size(typography::BODY))
        .push(Text::new(i18n.tr("print-step-layout")).size(typography::BODY))
        .push(Text::new(i18n.tr("print-step-print")).size(typography::BODY));

    panel(
        Overlay::Print,
        i18n.tr("print-title"),
        i18n.tr("overlay-close"),
        body.into(),
    )
}
