// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{Error, ExportError};
use crate::media::{ExportRequest, LoadedImage};
use crate::ui::viewer::controller;
use iced::event;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toolbar presses, forwarded straight to the transform controller.
    Viewer(controller::Message),
    /// Native window, keyboard and mouse events from the subscription.
    RawEvent(event::Event),
    /// Completion of the load started for `index`.
    ImageLoaded {
        index: usize,
        result: Result<LoadedImage, Error>,
    },
    /// Save dialog closed; `None` when cancelled.
    DestinationChosen {
        request: ExportRequest,
        path: Option<PathBuf>,
    },
    DownloadFinished(Result<PathBuf, ExportError>),
    SpinnerTick,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Image locations to preview, in order.
    pub locations: Vec<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `IMAGE_PREVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
