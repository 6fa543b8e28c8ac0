// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::SPINNER_TICK_MS;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Routes native events to the viewer.
///
/// Keyboard events and presses already captured by a widget (a toolbar
/// button, for instance) are dropped so they do not trigger a second action.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let captured = matches!(status, event::Status::Captured);
        let forward = match &event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => !captured,
            event::Event::Mouse(mouse::Event::ButtonPressed(_)) => !captured,
            event::Event::Mouse(_) => true,
            event::Event::Window(window::Event::Resized(_)) => true,
            _ => false,
        };
        forward.then_some(Message::RawEvent(event))
    })
}

/// Spinner animation ticks, only while an image is loading.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(Duration::from_millis(SPINNER_TICK_MS)).map(|_| Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}
