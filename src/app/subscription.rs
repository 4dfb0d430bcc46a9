// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, touch and window events are forwarded as
//! [`Message::RawEvent`]; `update` translates them into controller events.

use super::Message;
use crate::controller::Event;
use iced::{event, keyboard, time, touch, window, Subscription};
use std::time::Duration;

/// Interval of the debounce tick.
const TICK_INTERVAL: Duration = Duration::from_millis(25);

/// Forwards the native events the presenter reacts to.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        forwards(&event, status).then(|| Message::RawEvent {
            window: window_id,
            event,
        })
    })
}

/// Keyboard events captured by a widget (typing in the jump field) are
/// dropped; this is the only place focus is taken into account. Touch
/// events are forwarded even when the strip scrollable captured them, so
/// swipes still work over the slides.
fn forwards(event: &iced::Event, status: event::Status) -> bool {
    match event {
        iced::Event::Window(window::Event::Resized(_) | window::Event::Opened { .. }) => true,
        iced::Event::Touch(
            touch::Event::FingerPressed { .. }
            | touch::Event::FingerLifted { .. }
            | touch::Event::FingerLost { .. },
        ) => true,
        iced::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => {
            matches!(status, event::Status::Ignored)
        }
        _ => false,
    }
}

/// Ticks while a debounced recomputation is pending.
pub fn create_tick_subscription(pending: bool) -> Subscription<Message> {
    if pending {
        time::every(TICK_INTERVAL).map(|at| Message::Deck(Event::Tick(at)))
    } else {
        Subscription::none()
    }
}
