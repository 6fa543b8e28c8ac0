// SPDX-License-Identifier: MPL-2.0
//! Raw input mapping.
//!
//! Translates window events into controller messages. Pointer positions are
//! converted to coordinates relative to the image area centre before they
//! reach the controller.

use super::controller::{Direction, Message, ResetPolicy};
use super::toolbar::{Tool, ToolSet};
use crate::config::{DOUBLE_CLICK_THRESHOLD_MS, PIXELS_PER_WHEEL_LINE};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, mouse, Point, Rectangle};
use std::time::{Duration, Instant};

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(DOUBLE_CLICK_THRESHOLD_MS);

/// Pointer bookkeeping needed to interpret mouse events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    cursor: Option<Point>,
    last_click: Option<Instant>,
}

impl InputState {
    /// Maps `event` to a controller message.
    ///
    /// `area` is the image container in window coordinates. Pointer input
    /// outside of it is ignored, except for releases which always end a drag.
    pub fn map_event(
        &mut self,
        event: &event::Event,
        area: Rectangle,
        tools: &ToolSet,
        reset_policy: ResetPolicy,
        now: Instant,
    ) -> Option<Message> {
        match event {
            event::Event::Mouse(mouse_event) => {
                self.map_mouse(mouse_event, area, reset_policy, now)
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut(key, *modifiers, tools)
            }
            _ => None,
        }
    }

    fn map_mouse(
        &mut self,
        event: &mouse::Event,
        area: Rectangle,
        reset_policy: ResetPolicy,
        now: Instant,
    ) -> Option<Message> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = Some(*position);
                Some(Message::ContinueDrag(relative_to_center(*position, area)))
            }
            mouse::Event::CursorLeft => {
                self.cursor = None;
                Some(Message::EndDrag)
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = self.cursor.filter(|p| area.contains(*p))?;

                let double_click = self
                    .last_click
                    .is_some_and(|last| now.duration_since(last) <= DOUBLE_CLICK_THRESHOLD);
                if double_click {
                    // A third click starts a fresh sequence
                    self.last_click = None;
                    return Some(reset_policy.message());
                }

                self.last_click = Some(now);
                Some(Message::BeginDrag(relative_to_center(position, area)))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => Some(Message::EndDrag),
            mouse::Event::WheelScrolled { delta } => {
                let position = self.cursor.filter(|p| area.contains(*p))?;
                let delta_sign = wheel_delta_sign(delta)?;
                Some(Message::WheelZoom {
                    cursor: relative_to_center(position, area),
                    delta_sign,
                })
            }
            _ => None,
        }
    }
}

/// Converts a window position into one relative to the centre of `area`.
#[must_use]
pub fn relative_to_center(position: Point, area: Rectangle) -> Point {
    let center = area.center();
    Point::new(position.x - center.x, position.y - center.y)
}

/// Normalizes wheel units (lines vs. pixels) and returns the zoom direction:
/// negative to zoom in, positive to zoom out. Scrolling up zooms in.
#[must_use]
pub fn wheel_delta_sign(delta: &mouse::ScrollDelta) -> Option<f32> {
    let steps = match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_WHEEL_LINE,
    };
    if steps.abs() < f32::EPSILON {
        None
    } else {
        Some(-steps.signum())
    }
}

/// Keyboard shortcut lookup. Shortcuts of disabled tools are not delivered.
#[must_use]
pub fn shortcut(key: &Key, modifiers: Modifiers, tools: &ToolSet) -> Option<Message> {
    let (tool, message) = match key {
        Key::Named(Named::ArrowLeft) if modifiers.is_empty() => {
            (Tool::Prev, Message::Navigate(Direction::Prev))
        }
        Key::Named(Named::ArrowRight) if modifiers.is_empty() => {
            (Tool::Next, Message::Navigate(Direction::Next))
        }
        Key::Character(c) if modifiers.command() && !modifiers.alt() => match c.as_str() {
            "+" | "=" => (Tool::ZoomIn, Message::ZoomIn),
            "-" => (Tool::ZoomOut, Message::ZoomOut),
            "0" => (Tool::ResetScale, Message::ResetAll),
            _ => return None,
        },
        Key::Character(c)
            if (c.as_str() == "r" || c.as_str() == "R")
                && !modifiers.command()
                && !modifiers.alt() =>
        {
            (Tool::Rotate, Message::Rotate)
        }
        _ => return None,
    };

    tools.is_enabled(tool).then_some(message)
}
