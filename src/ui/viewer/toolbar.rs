// SPDX-License-Identifier: MPL-2.0
//! Action bar below the image.
//!
//! The set of visible tools is configurable. A tool missing from the set is
//! neither rendered nor reachable through its keyboard shortcut.

use super::controller::{Direction, Message, TransformController};
use crate::ui::state::ViewportState;
use iced::widget::{button, container, text, Row};
use iced::{alignment, Element, Length};
use serde::{Deserialize, Serialize};

/// Toolbar actions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    Prev,
    Next,
    Resource,
    ZoomIn,
    ZoomOut,
    ResetScale,
    Rotate,
    Download,
}

/// Every tool, in display order.
pub const DEFAULT_TOOLSET: [Tool; 8] = [
    Tool::Prev,
    Tool::Next,
    Tool::Resource,
    Tool::ZoomIn,
    Tool::ZoomOut,
    Tool::ResetScale,
    Tool::Rotate,
    Tool::Download,
];

impl Tool {
    /// Controller message triggered by the tool.
    #[must_use]
    pub fn message(self) -> Message {
        match self {
            Tool::Prev => Message::Navigate(Direction::Prev),
            Tool::Next => Message::Navigate(Direction::Next),
            Tool::Resource => Message::ShowResource,
            Tool::ZoomIn => Message::ZoomIn,
            Tool::ZoomOut => Message::ZoomOut,
            Tool::ResetScale => Message::ResetAll,
            Tool::Rotate => Message::Rotate,
            Tool::Download => Message::RequestDownload,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tool::Prev => "◀",
            Tool::Next => "▶",
            Tool::Resource => "Source",
            Tool::ZoomIn => "+",
            Tool::ZoomOut => "−",
            Tool::ResetScale => "1:1",
            Tool::Rotate => "⟳",
            Tool::Download => "Download",
        }
    }
}

/// Enabled tools, deduplicated and kept in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSet {
    tools: Vec<Tool>,
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::from_tools(DEFAULT_TOOLSET)
    }
}

impl ToolSet {
    pub fn from_tools(tools: impl IntoIterator<Item = Tool>) -> Self {
        let mut tools: Vec<Tool> = tools.into_iter().collect();
        tools.sort();
        tools.dedup();
        Self { tools }
    }

    #[must_use]
    pub fn is_enabled(&self, tool: Tool) -> bool {
        self.tools.contains(&tool)
    }

    pub fn iter(&self) -> impl Iterator<Item = Tool> + '_ {
        self.tools.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Whether pressing `tool` would change anything in `state`.
fn is_actionable(tool: Tool, state: &ViewportState, controller: &TransformController) -> bool {
    let table = controller.scale_table();
    match tool {
        Tool::Prev => state.current_index > 0,
        Tool::Next => state.current_index + 1 < controller.image_count(),
        Tool::ZoomIn => !table.is_top(state.scale_index),
        Tool::ZoomOut => !table.is_bottom(state.scale_index),
        Tool::Resource | Tool::ResetScale | Tool::Rotate | Tool::Download => true,
    }
}

/// Renders the enabled tools. Buttons with nothing to do are shown inactive.
pub fn view<'a>(
    tools: &ToolSet,
    state: &ViewportState,
    controller: &TransformController,
    height: f32,
) -> Element<'a, Message> {
    let row = tools.iter().fold(Row::new().spacing(6), |row, tool| {
        let mut btn = button(text(tool.label())).padding([4, 10]);
        if is_actionable(tool, state, controller) {
            btn = btn.on_press(tool.message());
        }
        row.push(btn)
    });

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
