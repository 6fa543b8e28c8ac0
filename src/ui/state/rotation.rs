// SPDX-License-Identifier: MPL-2.0
//! Rotation angle type for temporary image rotation.
//!
//! The accumulated angle is kept unbounded (90, 180, ..., 450, ...) so that
//! renderers animating between states always turn in the same direction.
//! Only the angle modulo 360 is visually meaningful.

/// Accumulated clockwise rotation, always a multiple of 90°.
///
/// # Example
///
/// ```
/// use image_preview::ui::state::Rotation;
///
/// let angle = Rotation::ZERO.rotate_clockwise();
/// assert_eq!(angle.degrees(), 90);
///
/// let full = angle.rotate_clockwise().rotate_clockwise().rotate_clockwise();
/// assert_eq!(full.degrees(), 360);
/// assert_eq!(full.effective_degrees(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation(i32);

impl Rotation {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// One clockwise quarter turn.
    pub const STEP: i32 = 90;

    /// Creates a rotation, rounding down to a multiple of 90°.
    #[must_use]
    pub fn new(degrees: i32) -> Self {
        Self(degrees.div_euclid(Self::STEP) * Self::STEP)
    }

    /// Accumulated angle in degrees.
    #[must_use]
    pub fn degrees(self) -> i32 {
        self.0
    }

    /// Visible angle in `0..360`.
    #[must_use]
    pub fn effective_degrees(self) -> i32 {
        self.0.rem_euclid(360)
    }

    /// Visible angle in radians.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // effective angle is at most 270
    pub fn radians(self) -> f32 {
        (self.effective_degrees() as f32).to_radians()
    }

    /// Adds a 90° clockwise turn. At the top of the `i32` range the angle
    /// stays where it is.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        self.0.checked_add(Self::STEP).map_or(self, Self)
    }

    /// Returns true if width and height swap when rendering.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self.effective_degrees(), 90 | 270)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rounds_down_to_quarter_turns() {
        assert_eq!(Rotation::new(0).degrees(), 0);
        assert_eq!(Rotation::new(89).degrees(), 0);
        assert_eq!(Rotation::new(135).degrees(), 90);
        assert_eq!(Rotation::new(450).degrees(), 450);
        assert_eq!(Rotation::new(-90).degrees(), -90);
    }

    #[test]
    fn accumulates_past_full_turn() {
        let mut angle = Rotation::ZERO;
        for _ in 0..5 {
            angle = angle.rotate_clockwise();
        }
        assert_eq!(angle.degrees(), 450);
        assert_eq!(angle.effective_degrees(), 90);
    }

    #[test]
    fn rotate_clockwise_stays_on_quarter_turns_near_overflow() {
        let mut angle = Rotation::new(i32::MAX - 10);
        for _ in 0..3 {
            angle = angle.rotate_clockwise();
            assert_eq!(angle.degrees() % Rotation::STEP, 0);
        }
        assert_eq!(angle, Rotation::new(i32::MAX));
    }

    #[test]
    fn effective_degrees_handles_negative_angles() {
        assert_eq!(Rotation::new(-90).effective_degrees(), 270);
    }

    #[test]
    fn swaps_dimensions_for_quarter_turns() {
        assert!(!Rotation::new(0).swaps_dimensions());
        assert!(Rotation::new(90).swaps_dimensions());
        assert!(!Rotation::new(180).swaps_dimensions());
        assert!(Rotation::new(270).swaps_dimensions());
        assert!(Rotation::new(450).swaps_dimensions());
    }

    #[test]
    fn radians_conversion() {
        use std::f32::consts::PI;
        assert!((Rotation::new(0).radians() - 0.0).abs() < f32::EPSILON);
        assert!((Rotation::new(90).radians() - PI / 2.0).abs() < 0.001);
        assert!((Rotation::new(540).radians() - PI).abs() < 0.001);
    }
}
