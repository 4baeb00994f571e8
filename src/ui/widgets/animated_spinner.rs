// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown inside busy buttons.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Radians the arc advances per animation tick.
pub const ROTATION_STEP: f32 = PI / 8.0;

/// Advances a rotation angle by one tick, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % (2.0 * PI)
}

/// Half-circle arc drawn over a faint ring.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_SM,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let stroke_width = (self.size / 8.0).max(1.5);
                let radius = frame.width().min(frame.height()) / 2.0 - stroke_width;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(stroke_width).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Start at 12 o'clock
                let start_angle = self.rotation - PI / 2.0;
                let segments = 24;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let angle = start_angle + PI * (i as f32 / segments as f32);
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
