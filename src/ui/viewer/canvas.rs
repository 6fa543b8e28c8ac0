// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the transformed image.
//!
//! The frame origin is moved to the container centre, then the viewport
//! transform is applied: translate by the pan, rotate, scale. The image is
//! drawn centred on that origin at its natural size. While loading, a spinner
//! arc is drawn on top.

use crate::ui::state::Transform;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::widget::image::Handle;
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::f32::consts::PI;

const SPINNER_RADIUS: f32 = 18.0;
const SPINNER_SEGMENTS: u16 = 30;

/// Image ready to be drawn.
#[derive(Debug, Clone)]
pub struct DisplayedImage {
    pub handle: Handle,
    pub natural_size: Size,
}

/// Borrowed view of what the canvas needs for one frame.
pub struct ImageCanvas<'a> {
    pub cache: &'a Cache,
    pub image: Option<&'a DisplayedImage>,
    pub transform: Transform,
    pub is_loading: bool,
    /// Spinner angle in radians, advanced by the host while loading.
    pub spinner_angle: f32,
}

impl<Message> canvas::Program<Message> for ImageCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let image = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let Some(image) = self.image else {
                return;
            };
            let center = frame.center();
            let transform = self.transform;

            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y) + transform.translate);
                frame.rotate(transform.radians());
                frame.scale(transform.scale);

                let size = image.natural_size;
                let top_left = Point::new(-size.width / 2.0, -size.height / 2.0);
                frame.draw_image(
                    Rectangle::new(top_left, size),
                    canvas::Image::new(image.handle.clone()),
                );
            });
        });

        if !self.is_loading {
            return vec![image];
        }

        let mut overlay = Frame::new(renderer, bounds.size());
        draw_spinner(
            &mut overlay,
            self.spinner_angle,
            theme.extended_palette().primary.base.color,
        );
        vec![image, overlay.into_geometry()]
    }
}

fn draw_spinner(frame: &mut Frame, angle: f32, color: Color) {
    let center = frame.center();

    frame.stroke(
        &Path::circle(center, SPINNER_RADIUS),
        Stroke::default()
            .with_width(3.0)
            .with_color(Color { a: 0.25, ..color }),
    );

    // Half-circle arc starting at the top
    let start = angle - PI / 2.0;
    let mut arc = canvas::path::Builder::new();
    arc.move_to(point_on_circle(center, start));
    for i in 1..=SPINNER_SEGMENTS {
        let t = f32::from(i) / f32::from(SPINNER_SEGMENTS);
        arc.line_to(point_on_circle(center, start + PI * t));
    }

    frame.stroke(
        &arc.build(),
        Stroke::default()
            .with_width(3.0)
            .with_color(color)
            .with_line_cap(canvas::LineCap::Round),
    );
}

fn point_on_circle(center: Point, angle: f32) -> Point {
    Point::new(
        center.x + SPINNER_RADIUS * angle.cos(),
        center.y + SPINNER_RADIUS * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn spinner_starts_at_top() {
        let top = point_on_circle(Point::new(50.0, 50.0), -PI / 2.0);
        assert_abs_diff_eq!(top.x, 50.0, epsilon = 1e-4);
        assert_abs_diff_eq!(top.y, 50.0 - SPINNER_RADIUS, epsilon = 1e-4);
    }
}
