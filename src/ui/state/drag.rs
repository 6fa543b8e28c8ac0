// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning through images.

use iced::{Point, Vector};

/// Where an active drag gesture started.
///
/// Present only while the pointer is held down on an overflowing image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Pointer position when the drag started (screen space).
    pub pointer_start: Point,

    /// Pan offset when the drag started.
    pub pan_start: Vector,
}

impl DragAnchor {
    #[must_use]
    pub fn new(pointer_start: Point, pan_start: Vector) -> Self {
        Self {
            pointer_start,
            pan_start,
        }
    }

    /// Pan offset for the pointer at `current`: the starting pan plus the
    /// distance the pointer travelled. Panning follows the pointer.
    #[must_use]
    pub fn pan_for(&self, current: Point) -> Vector {
        self.pan_start + (current - self.pointer_start)
    }
}
