// SPDX-License-Identifier: MPL-2.0
//! Image viewer: transform controller, input mapping, canvas and action bar.

pub mod canvas;
pub mod controller;
pub mod input;
pub mod toolbar;

use self::canvas::{DisplayedImage, ImageCanvas};
use self::controller::{Message, TransformController};
use self::toolbar::ToolSet;
use crate::config::STATUS_LINE_HEIGHT;
use crate::ui::state::ViewportState;
use iced::widget::canvas::{Cache, Canvas};
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length};

/// Everything the viewer needs to render one frame.
pub struct ViewContext<'a> {
    pub controller: &'a TransformController,
    pub state: &'a ViewportState,
    pub tools: &'a ToolSet,
    pub cache: &'a Cache,
    pub image: Option<&'a DisplayedImage>,
    pub spinner_angle: f32,
    pub action_bar_height: f32,
    /// Error or info line shown under the image, if any.
    pub status: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let program = ImageCanvas {
        cache: ctx.cache,
        image: ctx.image,
        transform: ctx.controller.compute_transform(ctx.state),
        is_loading: ctx.state.is_loading,
        spinner_angle: ctx.spinner_angle,
    };

    let image_area = Canvas::new(program)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(image_area);

    if let Some(status) = ctx.status {
        column = column.push(
            Container::new(text(status).size(12))
                .width(Length::Fill)
                .height(Length::Fixed(STATUS_LINE_HEIGHT))
                .padding([2, 8])
                .align_x(alignment::Horizontal::Center),
        );
    }

    if !ctx.tools.is_empty() {
        column = column.push(toolbar::view(
            ctx.tools,
            ctx.state,
            ctx.controller,
            ctx.action_bar_height,
        ));
    }

    column.into()
}
