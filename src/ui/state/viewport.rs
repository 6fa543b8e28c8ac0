// SPDX-License-Identifier: MPL-2.0
//! Viewport state record
//!
//! One instance exists per mounted viewer. It is only ever replaced by the
//! transform controller; the host reads the derived transform and flags.

use super::{DragAnchor, Rotation};
use iced::Vector;

/// Mutable state of the image viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Index of the displayed image in the host's list.
    pub current_index: usize,

    /// Position in the scale table.
    pub scale_index: usize,

    /// Accumulated rotation.
    pub rotation: Rotation,

    /// Translation applied after scale and rotation, in screen pixels.
    pub pan: Vector,

    /// Active drag gesture, if any.
    pub drag: Option<DragAnchor>,

    /// Set when the current index changes, cleared when its image has loaded.
    pub is_loading: bool,

    /// Whether the rendered image is larger than its container.
    pub is_overflowing: bool,
}

impl ViewportState {
    /// Initial state: first image, natural size, no rotation or pan, loading.
    #[must_use]
    pub fn new(natural_index: usize) -> Self {
        Self {
            current_index: 0,
            scale_index: natural_index,
            rotation: Rotation::ZERO,
            pan: Vector::ZERO,
            drag: None,
            is_loading: true,
            is_overflowing: false,
        }
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
