// SPDX-License-Identifier: MPL-2.0
//! Application root state: hosts one viewer over a fixed list of images.
//!
//! The `App` struct owns the transform controller and the current viewport
//! state, turns raw window events into controller messages, and carries out
//! the effects the controller reports (loading, overflow measurement,
//! downloads).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ExportConfig, ACTION_BAR_HEIGHT, STATUS_LINE_HEIGHT};
use crate::error::Result;
use crate::media::export::suggested_filename;
use crate::ui::state::ViewportState;
use crate::ui::viewer::canvas::DisplayedImage;
use crate::ui::viewer::controller::{ResetPolicy, TransformController};
use crate::ui::viewer::input::InputState;
use crate::ui::viewer::toolbar::ToolSet;
use iced::widget::canvas::Cache;
use iced::{window, Point, Rectangle, Size, Subscription, Task, Theme};
use std::fmt;

const APP_TITLE: &str = "Image Preview";
const MIN_WINDOW_SIZE: f32 = 200.0;

/// Root Iced application state.
pub struct App {
    controller: TransformController,
    viewport: ViewportState,
    input: InputState,
    tools: ToolSet,
    reset_policy: ResetPolicy,
    export: ExportConfig,
    image: Option<DisplayedImage>,
    cache: Cache,
    window_size: Size,
    spinner_angle: f32,
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewport", &self.viewport)
            .field("has_image", &self.image.is_some())
            .field("status", &self.status)
            .finish()
    }
}

/// Builds the window settings from the viewer configuration.
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: Size::new(config.viewer.width, config.viewer.height),
        min_size: Some(Size::new(MIN_WINDOW_SIZE, MIN_WINDOW_SIZE)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, warning) = config::load();
    let settings = window_settings(&config);
    let (app, task) = App::new(flags.locations, config, warning)?;

    // iced 0.14 requires a Fn boot closure; the prepared state is handed over once
    let boot_state = RefCell::new(Some((app, task)));
    let boot = move || {
        boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once")
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Creates the viewer for `locations` and starts loading the first image.
    ///
    /// `warning` is a configuration problem to show in the status line.
    pub fn new(
        locations: Vec<String>,
        config: Config,
        warning: Option<String>,
    ) -> Result<(Self, Task<Message>)> {
        let (scale_table, table_warning) = config.viewer.scale_table();
        let controller = TransformController::new(locations, scale_table)?;
        let viewport = controller.initial_state();

        let app = App {
            viewport,
            input: InputState::default(),
            tools: config.viewer.tool_set(),
            reset_policy: config.viewer.double_click_reset,
            export: config.export,
            image: None,
            cache: Cache::default(),
            window_size: Size::new(config.viewer.width, config.viewer.height),
            spinner_angle: 0.0,
            status: warning.or(table_warning),
            controller,
        };

        let task = app.load_task(app.viewport.current_index);
        Ok((app, task))
    }

    fn title(&self) -> String {
        let index = self.viewport.current_index;
        match self.controller.location(index) {
            Some(location) => format!(
                "{} ({}/{}) - {APP_TITLE}",
                suggested_filename(location),
                index + 1,
                self.controller.image_count()
            ),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.viewport.is_loading),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => self.apply(viewer_message),
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::ImageLoaded { index, result } => self.handle_image_loaded(index, result),
            Message::DestinationChosen { request, path } => {
                self.handle_destination_chosen(request, path)
            }
            Message::DownloadFinished(result) => self.handle_download_finished(result),
            Message::SpinnerTick => {
                self.spinner_angle = (self.spinner_angle + 0.15) % std::f32::consts::TAU;
                Task::none()
            }
        }
    }

    /// Region the image is drawn in, in window coordinates.
    fn image_area(&self) -> Rectangle {
        let mut height = self.window_size.height;
        if !self.tools.is_empty() {
            height -= ACTION_BAR_HEIGHT;
        }
        if self.status.is_some() {
            height -= STATUS_LINE_HEIGHT;
        }
        Rectangle::new(
            Point::ORIGIN,
            Size::new(self.window_size.width, height.max(0.0)),
        )
    }
}
