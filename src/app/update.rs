// SPDX-License-Identifier: MPL-2.0
//! Update handlers: feeding the controller and carrying out its effects.

use super::{App, Message};
use crate::error::{Error, ExportError};
use crate::media::export::{self, DownloadExporter, ExportRequest};
use crate::media::source::{self, ImageLocation, LoadedImage};
use crate::ui::viewer::canvas::DisplayedImage;
use crate::ui::viewer::controller::{self, Effect};
use iced::widget::image::Handle;
use iced::{event, window, Size, Task};
use std::path::PathBuf;
use std::time::Instant;

impl App {
    /// Runs `message` through the controller and performs the resulting effect.
    pub(super) fn apply(&mut self, message: controller::Message) -> Task<Message> {
        let (next, effect) = self.controller.update(&self.viewport, message);
        if next != self.viewport {
            self.cache.clear();
        }
        self.viewport = next;
        self.perform(effect)
    }

    pub(super) fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            self.window_size = size;
            self.cache.clear();
            return self.measure_overflow();
        }

        let area = self.image_area();
        match self
            .input
            .map_event(&event, area, &self.tools, self.reset_policy, Instant::now())
        {
            Some(message) => self.apply(message),
            None => Task::none(),
        }
    }

    pub(super) fn handle_image_loaded(
        &mut self,
        index: usize,
        result: Result<LoadedImage, Error>,
    ) -> Task<Message> {
        if index != self.viewport.current_index {
            // The controller logs and ignores it as well
            return self.apply(controller::Message::ImageLoaded { index });
        }

        match result {
            Ok(loaded) => {
                self.image = Some(DisplayedImage {
                    natural_size: Size::new(loaded.width as f32, loaded.height as f32),
                    handle: Handle::from_bytes(loaded.bytes),
                });
                self.status = None;
                let task = self.apply(controller::Message::ImageLoaded { index });
                // A new image always needs a fresh measurement
                let measured = self.measure_overflow();
                Task::batch([task, measured])
            }
            Err(err) => {
                tracing::warn!(index, %err, "image failed to load");
                self.status = Some(err.to_string());
                Task::none()
            }
        }
    }

    pub(super) fn handle_destination_chosen(
        &mut self,
        request: ExportRequest,
        path: Option<PathBuf>,
    ) -> Task<Message> {
        let Some(path) = path else {
            tracing::debug!(location = %request.location, "download cancelled");
            return Task::none();
        };

        Task::perform(
            async move { export::save_to(&request.location, &path).await },
            Message::DownloadFinished,
        )
    }

    pub(super) fn handle_download_finished(
        &mut self,
        result: Result<PathBuf, ExportError>,
    ) -> Task<Message> {
        self.status = Some(match result {
            Ok(path) => format!("Saved to {}", path.display()),
            Err(err) => {
                tracing::warn!(%err, "download failed");
                format!("Download failed: {err}")
            }
        });
        self.measure_overflow()
    }

    fn perform(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::LoadImage { index } => self.load_task(index),
            Effect::MeasureOverflow => self.measure_overflow(),
            Effect::Download(request) => self.download_task(request),
            Effect::ShowResource { location } => {
                self.status = Some(location);
                self.measure_overflow()
            }
        }
    }

    /// Compares the rendered image bounds with the image area.
    fn measure_overflow(&mut self) -> Task<Message> {
        let Some(image) = &self.image else {
            return Task::none();
        };

        let rendered = self
            .controller
            .compute_transform(&self.viewport)
            .bounds_of(image.natural_size);
        let container = self.image_area().size();

        self.apply(controller::Message::RecomputeOverflow {
            image: rendered,
            container,
        })
    }

    pub(super) fn load_task(&self, index: usize) -> Task<Message> {
        let Some(location) = self.controller.location(index) else {
            return Task::none();
        };
        let location = ImageLocation::parse(location);
        tracing::debug!(index, %location, "loading image");

        Task::perform(source::load(location), move |result| Message::ImageLoaded {
            index,
            result,
        })
    }

    fn download_task(&self, request: ExportRequest) -> Task<Message> {
        let target_dir = self.export.target_dir();

        if self.export.ask_destination {
            let filename = request.suggested_filename.clone();
            return Task::perform(
                async move {
                    rfd::AsyncFileDialog::new()
                        .set_title("Save Image")
                        .set_file_name(&filename)
                        .set_directory(&target_dir)
                        .save_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                move |path| Message::DestinationChosen { request, path },
            );
        }

        let controller = self.controller.clone();
        let state = self.viewport.clone();
        let exporter = DownloadExporter::new(target_dir);
        Task::perform(
            async move { controller.request_download(&state, &exporter).await },
            Message::DownloadFinished,
        )
    }
}
