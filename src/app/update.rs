// SPDX-License-Identifier: MPL-2.0
//! Message handling: native event translation and effect execution.

use super::Message;
use crate::controller::{DeckController, Effect, Event};
use crate::platform::{FullscreenMethod, FullscreenRequest};
use crate::surface::{load_slide_async, ImageSurface};
use crate::ui::stage::SCROLLABLE_ID;
use crate::ui::theming::ThemeMode;
use crate::viewport::Axis;
use iced::widget::{operation, scrollable::RelativeOffset, Id};
use iced::{keyboard, touch, window, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub controller: &'a mut DeckController<ImageSurface>,
    pub window_id: &'a mut Option<window::Id>,
    pub theme_mode: &'a mut ThemeMode,
}

/// Translates a native event into a controller event.
#[must_use]
pub fn translate(event: &iced::Event, at: Instant) -> Option<Event> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Event::Key {
                key: key.clone(),
                modifiers: *modifiers,
            })
        }
        iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(Event::FingerPressed {
                finger: *id,
                x: position.x,
            })
        }
        iced::Event::Touch(touch::Event::FingerLifted { id, position }) => {
            Some(Event::FingerLifted {
                finger: *id,
                x: position.x,
            })
        }
        iced::Event::Touch(touch::Event::FingerLost { .. }) => Some(Event::FingerLost),
        iced::Event::Window(window::Event::Resized(size)) => Some(Event::Resized {
            window: *size,
            at,
        }),
        iced::Event::Window(window::Event::Opened { size, .. }) => Some(Event::Resized {
            window: *size,
            at,
        }),
        _ => None,
    }
}

pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: &iced::Event,
) -> Task<Message> {
    *ctx.window_id = Some(window);
    match translate(event, Instant::now()) {
        Some(event) => handle_deck_event(ctx, event),
        None => Task::none(),
    }
}

pub fn handle_deck_event(ctx: &mut UpdateContext<'_>, event: Event) -> Task<Message> {
    let effects = ctx.controller.handle(event);
    run_effects(ctx, effects)
}

/// Turns controller effects into runtime tasks.
pub fn run_effects(ctx: &mut UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let tasks: Vec<Task<Message>> = effects
        .into_iter()
        .map(|effect| match effect {
            Effect::Load(request) => {
                let number = request.number;
                let purpose = request.purpose;
                Task::perform(load_slide_async(request.path), move |result| {
                    Message::Deck(Event::SlideLoaded {
                        number,
                        purpose,
                        result,
                    })
                })
            }
            Effect::ScrollTo { axis, offset } => {
                let target = match axis {
                    Axis::Horizontal => RelativeOffset { x: offset, y: 0.0 },
                    Axis::Vertical => RelativeOffset { x: 0.0, y: offset },
                };
                operation::snap_to(Id::new(SCROLLABLE_ID), target)
            }
            Effect::Fullscreen(request) => match *ctx.window_id {
                Some(window) => fullscreen_task(window, request),
                None => {
                    tracing::debug!("fullscreen requested before the window reported its id");
                    Task::none()
                }
            },
            Effect::QueryFullscreen(method) => match *ctx.window_id {
                Some(window) => report_mode(window, method),
                None => Task::none(),
            },
            Effect::ToggleTheme => {
                *ctx.theme_mode = ctx.theme_mode.toggled();
                tracing::debug!(mode = ?*ctx.theme_mode, "theme toggled");
                Task::none()
            }
        })
        .collect();

    Task::batch(tasks)
}

/// Reads the mode the window is actually in and reports it to the controller.
fn report_mode(window: window::Id, method: FullscreenMethod) -> Task<Message> {
    match method {
        FullscreenMethod::WindowMode => window::mode(window).map(|mode| {
            Message::Deck(Event::FullscreenChanged(mode == window::Mode::Fullscreen))
        }),
        FullscreenMethod::Maximize => window::is_maximized(window)
            .map(|maximized| Message::Deck(Event::FullscreenChanged(maximized))),
        FullscreenMethod::Unavailable => Task::none(),
    }
}

/// Asks the window system for a new mode, then reports the mode it actually
/// applied back to the controller.
fn fullscreen_task(window: window::Id, request: FullscreenRequest) -> Task<Message> {
    match request {
        FullscreenRequest::Enter(method @ FullscreenMethod::WindowMode) => {
            window::set_mode(window, window::Mode::Fullscreen).chain(report_mode(window, method))
        }
        FullscreenRequest::Exit(method @ FullscreenMethod::WindowMode) => {
            window::set_mode(window, window::Mode::Windowed).chain(report_mode(window, method))
        }
        FullscreenRequest::Enter(method @ FullscreenMethod::Maximize) => {
            window::maximize(window, true).chain(report_mode(window, method))
        }
        FullscreenRequest::Exit(method @ FullscreenMethod::Maximize) => {
            window::maximize(window, false).chain(report_mode(window, method))
        }
        FullscreenRequest::Enter(FullscreenMethod::Unavailable)
        | FullscreenRequest::Exit(FullscreenMethod::Unavailable) => Task::none(),
    }
}
