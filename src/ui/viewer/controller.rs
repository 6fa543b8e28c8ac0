// SPDX-License-Identifier: MPL-2.0
//! Viewport transform controller.
//!
//! Turns discrete viewer inputs into a new [`ViewportState`]. Every operation
//! is a pure reducer: it reads the current state and returns the next one,
//! leaving the input untouched. [`TransformController::update`] dispatches a
//! [`Message`] and reports an [`Effect`] the host has to carry out (start a
//! load, re-measure the image, run an export).
//!
//! Boundary conditions (first/last image, smallest/largest zoom factor, drag
//! without an anchor, stale load signals) are silent no-ops.

use crate::error::{Error, ExportError, Result};
use crate::media::export::{ExportRequest, ResourceExporter};
use crate::ui::state::geometry::{anchored_pan, overflows};
use crate::ui::state::{DragAnchor, Rotation, ScaleTable, Transform, ViewportState};
use iced::{Point, Size, Vector};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Navigation direction through the image list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// What a double-click on the image resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResetPolicy {
    /// Scale and pan only; rotation is kept.
    #[default]
    ScaleOnly,
    /// Scale, pan and rotation.
    All,
}

impl ResetPolicy {
    /// Message implementing this policy.
    #[must_use]
    pub fn message(self) -> Message {
        match self {
            ResetPolicy::ScaleOnly => Message::ResetScaleOnly,
            ResetPolicy::All => Message::ResetAll,
        }
    }
}

/// Inputs understood by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Navigate(Direction),
    ZoomIn,
    ZoomOut,
    /// Cursor-anchored zoom. `cursor` is relative to the container centre;
    /// a positive `delta_sign` zooms out, a negative one zooms in.
    WheelZoom { cursor: Point, delta_sign: f32 },
    ResetScaleOnly,
    ResetAll,
    Rotate,
    BeginDrag(Point),
    ContinueDrag(Point),
    EndDrag,
    /// Load completion for the image that was requested at `index`.
    ImageLoaded { index: usize },
    /// Measured geometry after layout settled.
    RecomputeOverflow { image: Size, container: Size },
    RequestDownload,
    ShowResource,
}

/// Work the host must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing to do beyond re-rendering.
    None,
    /// The current index changed; start loading this image.
    LoadImage { index: usize },
    /// Scale or rotation changed; measure and send `RecomputeOverflow`.
    MeasureOverflow,
    /// Hand this request to the resource exporter.
    Download(ExportRequest),
    /// Reveal the current image's location to the user.
    ShowResource { location: String },
}

/// Owns the immutable inputs of the viewport: the image list and the scale table.
#[derive(Debug, Clone)]
pub struct TransformController {
    locations: Vec<String>,
    scale_table: ScaleTable,
}

impl TransformController {
    /// Creates a controller for a non-empty list of image locations.
    pub fn new(locations: Vec<String>, scale_table: ScaleTable) -> Result<Self> {
        if locations.is_empty() {
            return Err(Error::EmptyImageList);
        }
        Ok(Self {
            locations,
            scale_table,
        })
    }

    /// State for a freshly mounted viewer.
    #[must_use]
    pub fn initial_state(&self) -> ViewportState {
        ViewportState::new(self.scale_table.natural_index())
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn scale_table(&self) -> &ScaleTable {
        &self.scale_table
    }

    /// Location of the image at `index`.
    #[must_use]
    pub fn location(&self, index: usize) -> Option<&str> {
        self.locations.get(index).map(String::as_str)
    }

    /// Dispatches `message` and returns the next state and the host effect.
    #[must_use]
    pub fn update(&self, state: &ViewportState, message: Message) -> (ViewportState, Effect) {
        match message {
            Message::Navigate(direction) => {
                let next = self.navigate(state, direction);
                let effect = if next.current_index == state.current_index {
                    Effect::None
                } else {
                    Effect::LoadImage {
                        index: next.current_index,
                    }
                };
                (next, effect)
            }
            Message::ZoomIn => self.transform_changed(state, self.zoom_in(state)),
            Message::ZoomOut => self.transform_changed(state, self.zoom_out(state)),
            Message::WheelZoom { cursor, delta_sign } => {
                self.transform_changed(state, self.wheel_zoom(state, cursor, delta_sign))
            }
            Message::ResetScaleOnly => self.transform_changed(state, self.reset_scale_only(state)),
            Message::ResetAll => self.transform_changed(state, self.reset_all(state)),
            Message::Rotate => self.transform_changed(state, self.rotate(state)),
            Message::BeginDrag(pointer) => (self.begin_drag(state, pointer), Effect::None),
            Message::ContinueDrag(pointer) => (self.continue_drag(state, pointer), Effect::None),
            Message::EndDrag => (self.end_drag(state), Effect::None),
            Message::ImageLoaded { index } => {
                self.transform_changed(state, self.on_image_loaded(state, index))
            }
            Message::RecomputeOverflow { image, container } => (
                self.recompute_overflow(state, image, container),
                Effect::None,
            ),
            Message::RequestDownload => match self.download_request(state) {
                Some(request) => (state.clone(), Effect::Download(request)),
                None => (state.clone(), Effect::None),
            },
            Message::ShowResource => match self.location(state.current_index) {
                Some(location) => (
                    state.clone(),
                    Effect::ShowResource {
                        location: location.to_string(),
                    },
                ),
                None => (state.clone(), Effect::None),
            },
        }
    }

    /// Steps one image back or forward and marks the new image as loading.
    ///
    /// The previous transform stays in place until [`Self::on_image_loaded`]
    /// resets it, so the old image does not jump during the transition.
    #[must_use]
    pub fn navigate(&self, state: &ViewportState, direction: Direction) -> ViewportState {
        let target = match direction {
            Direction::Prev => state.current_index.checked_sub(1),
            Direction::Next => Some(state.current_index + 1).filter(|i| *i < self.image_count()),
        };

        let Some(index) = target else {
            tracing::trace!(?direction, index = state.current_index, "navigation at list boundary");
            return state.clone();
        };

        tracing::debug!(from = state.current_index, to = index, "navigate");
        ViewportState {
            current_index: index,
            is_loading: true,
            ..state.clone()
        }
    }

    /// One step up the scale table; pan is left as is.
    #[must_use]
    pub fn zoom_in(&self, state: &ViewportState) -> ViewportState {
        self.step_scale(state, 1)
    }

    /// One step down the scale table; pan is left as is.
    #[must_use]
    pub fn zoom_out(&self, state: &ViewportState) -> ViewportState {
        self.step_scale(state, -1)
    }

    fn step_scale(&self, state: &ViewportState, step: isize) -> ViewportState {
        let current = state.scale_index as isize;
        let scale_index = self.scale_table.clamp_index(current + step);
        if scale_index == state.scale_index {
            tracing::trace!(scale_index, "zoom at scale table boundary");
            return state.clone();
        }

        tracing::debug!(
            from = self.scale_table.level(state.scale_index),
            to = self.scale_table.level(scale_index),
            "zoom"
        );
        ViewportState {
            scale_index,
            ..state.clone()
        }
    }

    /// Zooms one step while keeping the image pixel under `cursor` in place.
    ///
    /// `cursor` is expressed relative to the container centre. A zero
    /// `delta_sign` is ignored.
    #[must_use]
    pub fn wheel_zoom(&self, state: &ViewportState, cursor: Point, delta_sign: f32) -> ViewportState {
        let stepped = if delta_sign > 0.0 {
            self.zoom_out(state)
        } else if delta_sign < 0.0 {
            self.zoom_in(state)
        } else {
            return state.clone();
        };

        if stepped.scale_index == state.scale_index {
            return stepped;
        }

        let old_scale = self.scale_table.level(state.scale_index);
        let new_scale = self.scale_table.level(stepped.scale_index);
        ViewportState {
            pan: anchored_pan(cursor, state.pan, old_scale, new_scale),
            ..stepped
        }
    }

    /// Natural size, centred, drag cleared; rotation is kept.
    #[must_use]
    pub fn reset_scale_only(&self, state: &ViewportState) -> ViewportState {
        ViewportState {
            scale_index: self.scale_table.natural_index(),
            pan: Vector::ZERO,
            drag: None,
            ..state.clone()
        }
    }

    /// Natural size, centred, unrotated, drag cleared.
    #[must_use]
    pub fn reset_all(&self, state: &ViewportState) -> ViewportState {
        ViewportState {
            rotation: Rotation::ZERO,
            ..self.reset_scale_only(state)
        }
    }

    /// Adds a clockwise quarter turn. Scale and pan are untouched.
    #[must_use]
    pub fn rotate(&self, state: &ViewportState) -> ViewportState {
        ViewportState {
            rotation: state.rotation.rotate_clockwise(),
            ..state.clone()
        }
    }

    /// Starts panning. Only an overflowing image can be dragged.
    ///
    /// A press while a drag is already active ends that drag and anchors a
    /// new one at `pointer`.
    #[must_use]
    pub fn begin_drag(&self, state: &ViewportState, pointer: Point) -> ViewportState {
        if !state.is_overflowing {
            return state.clone();
        }
        if state.drag.is_some() {
            tracing::debug!("drag restarted while active");
        }
        ViewportState {
            drag: Some(DragAnchor::new(pointer, state.pan)),
            ..state.clone()
        }
    }

    #[must_use]
    pub fn continue_drag(&self, state: &ViewportState, pointer: Point) -> ViewportState {
        match state.drag {
            Some(anchor) => ViewportState {
                pan: anchor.pan_for(pointer),
                ..state.clone()
            },
            None => state.clone(),
        }
    }

    /// Clears the drag anchor. Idempotent.
    #[must_use]
    pub fn end_drag(&self, state: &ViewportState) -> ViewportState {
        ViewportState {
            drag: None,
            ..state.clone()
        }
    }

    /// Finishes loading the image requested for `index` and resets its transform.
    ///
    /// Signals for any index other than the current one are stale and ignored.
    #[must_use]
    pub fn on_image_loaded(&self, state: &ViewportState, index: usize) -> ViewportState {
        if index != state.current_index {
            tracing::debug!(
                loaded = index,
                current = state.current_index,
                "ignoring stale load completion"
            );
            return state.clone();
        }

        ViewportState {
            scale_index: self.scale_table.natural_index(),
            rotation: Rotation::ZERO,
            pan: Vector::ZERO,
            is_loading: false,
            ..state.clone()
        }
    }

    #[must_use]
    pub fn recompute_overflow(
        &self,
        state: &ViewportState,
        image: Size,
        container: Size,
    ) -> ViewportState {
        ViewportState {
            is_overflowing: overflows(image, container),
            ..state.clone()
        }
    }

    /// Projects the state into the renderable transform.
    #[must_use]
    pub fn compute_transform(&self, state: &ViewportState) -> Transform {
        Transform {
            scale: self.scale_table.level(state.scale_index),
            rotation_degrees: state.rotation.degrees(),
            translate: state.pan,
        }
    }

    /// Export request for the current image.
    #[must_use]
    pub fn download_request(&self, state: &ViewportState) -> Option<ExportRequest> {
        self.location(state.current_index).map(ExportRequest::for_location)
    }

    /// Exports the current image through `exporter`. Failures are returned
    /// untouched; nothing is retried.
    pub async fn request_download<E: ResourceExporter>(
        &self,
        state: &ViewportState,
        exporter: &E,
    ) -> std::result::Result<PathBuf, ExportError> {
        let request = self
            .download_request(state)
            .ok_or_else(|| ExportError::InvalidLocation(state.current_index.to_string()))?;
        exporter.export(request).await
    }

    fn transform_changed(&self, before: &ViewportState, after: ViewportState) -> (ViewportState, Effect) {
        let changed = before.scale_index != after.scale_index || before.rotation != after.rotation;
        let effect = if changed {
            Effect::MeasureOverflow
        } else {
            Effect::None
        };
        (after, effect)
    }
}
