// SPDX-License-Identifier: MPL-2.0
//! The stage: the current slide, or every slide laid out as a strip.

use crate::config::STRIP_GAP;
use crate::controller::Event;
use crate::i18n::fluent::I18n;
use crate::surface::{ImageSurface, SlideFrame, SlideImage};
use crate::ui::design_tokens::{border, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::viewport::{centering_padding, Axis, StripLayout};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::FilterMethod;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{image, mouse_area, Column, Container, Id, Row, Scrollable, Text};
use iced::{ContentFit, Element, Length, Point, Rectangle, Size};
use std::time::Instant;

/// Identifier of the strip scrollable, target of the centering operations.
pub const SCROLLABLE_ID: &str = "deck-strip";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
}

pub struct ViewModel<'a> {
    pub surface: &'a ImageSurface,
    pub current: usize,
    pub highlighted: Option<usize>,
    /// Size every slide is drawn at.
    pub slide_size: Size,
    /// Area the stage occupies.
    pub available: Size,
    /// Strip geometry, `None` in the single layout.
    pub strip: Option<StripLayout>,
    pub strip_padding: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>, model: ViewModel<'a>) -> Element<'a, Event> {
    let content = match model.strip {
        Some(strip) => view_strip(&ctx, &model, strip.axis()),
        None => view_single(&ctx, &model),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::stage(ctx.scheme))
        .into()
}

fn view_single<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>) -> Element<'a, Event> {
    let number = model.surface.active();
    let frame = view_frame(ctx, number, model.surface.frame(number), model.slide_size);
    let slide = Container::new(frame).style(styles::slide_frame(ctx.scheme.active_border, 0.0));

    // Padding keeps the slide centered while it fits; once zoomed past the
    // stage it drops to zero and the scrollbars take over.
    let padded = Container::new(slide).padding(centering_padding(model.slide_size, model.available));

    Scrollable::new(padded)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .into()
}

fn view_strip<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>, axis: Axis) -> Element<'a, Event> {
    let tiles: Vec<Element<'a, Event>> = model
        .surface
        .frames()
        .map(|(number, frame)| {
            let (color, width) = if number == model.current {
                (ctx.scheme.active_border, border::ACTIVE)
            } else if model.highlighted == Some(number) {
                (ctx.scheme.highlight_border, border::HIGHLIGHT)
            } else {
                (ctx.scheme.stage, 0.0)
            };
            let tile = Container::new(view_frame(ctx, number, Some(frame), model.slide_size))
                .style(styles::slide_frame(color, width));
            mouse_area(tile).on_press(Event::GoTo(number)).into()
        })
        .collect();

    let (content, direction): (Element<'a, Event>, Direction) = match axis {
        Axis::Horizontal => (
            Row::with_children(tiles)
                .spacing(STRIP_GAP)
                .padding(model.strip_padding)
                .into(),
            Direction::Horizontal(Scrollbar::new()),
        ),
        Axis::Vertical => (
            Column::with_children(tiles)
                .spacing(STRIP_GAP)
                .padding(model.strip_padding)
                .into(),
            Direction::Vertical(Scrollbar::new()),
        ),
    };

    Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(direction)
        .on_scroll(|viewport: Viewport| {
            let bounds = viewport.bounds();
            let offset = viewport.absolute_offset();
            Event::Scrolled {
                viewport: Rectangle::new(Point::new(offset.x, offset.y), bounds.size()),
                at: Instant::now(),
            }
        })
        .into()
}

fn view_frame<'a>(
    ctx: &ViewContext<'a>,
    number: usize,
    frame: Option<&'a SlideFrame>,
    size: Size,
) -> Element<'a, Event> {
    let content: Element<'a, Event> = match frame {
        Some(SlideFrame::Loaded(slide)) => view_image(slide, size),
        Some(SlideFrame::Failed { reason }) => Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr_with_args(
                    "slide-load-error",
                    &[("number", &number.to_string())],
                ))
                .size(typography::BODY)
                .style(styles::error_text(ctx.scheme)),
            )
            .push(Text::new(reason.as_str()).size(typography::CAPTION))
            .into(),
        Some(SlideFrame::Loading) | None => Text::new(ctx.i18n.tr("slide-loading"))
            .size(typography::BODY)
            .into(),
    };

    Container::new(content)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn view_image<'a>(slide: &SlideImage, size: Size) -> Element<'a, Event> {
    image(slide.handle.clone())
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .content_fit(ContentFit::Contain)
        .filter_method(filter_for(slide.intrinsic_size(), size))
        .into()
}

/// Pixel-exact slides keep their pixels; anything rescaled is smoothed.
fn filter_for(intrinsic: Option<Size>, drawn: Size) -> FilterMethod {
    match intrinsic {
        Some(native)
            if (native.width - drawn.width).abs() < 0.5
                && (native.height - drawn.height).abs() < 0.5 =>
        {
            FilterMethod::Nearest
        }
        _ => FilterMethod::Linear,
    }
}
