// SPDX-License-Identifier: MPL-2.0
//! Coordinate-space helpers shared by the controller and the host.
//!
//! Screen positions handed to the controller are relative to the container
//! centre, which is also the origin the image is drawn around. With that
//! convention a pixel `p` of the image (relative to the image centre) lands at
//! `translate + rotate(scale * p)`.

use super::Rotation;
use iced::{Point, Size, Vector};

/// Renderable projection of the viewport state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Zoom factor from the scale table.
    pub scale: f32,
    /// Accumulated rotation in degrees (multiple of 90).
    pub rotation_degrees: i32,
    /// Translation applied after scale and rotation, in screen pixels.
    pub translate: Vector,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_degrees: 0,
            translate: Vector::ZERO,
        }
    }
}

impl Transform {
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        Rotation::new(self.rotation_degrees)
    }

    /// Visible rotation in radians.
    #[must_use]
    pub fn radians(&self) -> f32 {
        self.rotation().radians()
    }

    /// Maps an image-space point (relative to the image centre) to screen
    /// space relative to the container centre: scale, rotate, then translate.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let (x, y) = (point.x * self.scale, point.y * self.scale);
        // Quarter turns are applied exactly to keep pixel positions integral
        let (rx, ry) = match self.rotation().effective_degrees() {
            90 => (-y, x),
            180 => (-x, -y),
            270 => (y, -x),
            _ => (x, y),
        };
        Point::new(rx + self.translate.x, ry + self.translate.y)
    }

    /// Bounding box of an image with `natural` size once this transform is applied.
    #[must_use]
    pub fn bounds_of(&self, natural: Size) -> Size {
        rotated_bounds(natural, self.scale, self.rotation())
    }
}

/// Bounding box of a `natural`-sized image after scaling and a quarter-turn rotation.
#[must_use]
pub fn rotated_bounds(natural: Size, scale: f32, rotation: Rotation) -> Size {
    let scaled = Size::new(natural.width * scale, natural.height * scale);
    if rotation.swaps_dimensions() {
        Size::new(scaled.height, scaled.width)
    } else {
        scaled
    }
}

/// Whether `image` is larger than `container` on either axis.
#[must_use]
pub fn overflows(image: Size, container: Size) -> bool {
    image.width > container.width || image.height > container.height
}

/// Pan offset keeping the image point under `cursor` fixed when the scale
/// changes from `old_scale` to `new_scale`.
#[must_use]
pub fn anchored_pan(cursor: Point, pan: Vector, old_scale: f32, new_scale: f32) -> Vector {
    let image_x = (cursor.x - pan.x) / old_scale;
    let image_y = (cursor.y - pan.y) / old_scale;
    Vector::new(cursor.x - image_x * new_scale, cursor.y - image_y * new_scale)
}
