// SPDX-License-Identifier: MPL-2.0
//! View composition for the application root.

use super::{App, Message};
use crate::config::ACTION_BAR_HEIGHT;
use crate::ui::viewer::{self, ViewContext};
use iced::Element;

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        viewer::view(ViewContext {
            controller: &self.controller,
            state: &self.viewport,
            tools: &self.tools,
            cache: &self.cache,
            image: self.image.as_ref(),
            spinner_angle: self.spinner_angle,
            action_bar_height: ACTION_BAR_HEIGHT,
            status: self.status.as_deref(),
        })
        .map(Message::Viewer)
    }
}
