//! Style attributes carried alongside geometry.

use crate::color::Color;

/// Whether a paint fills the interior of geometry or strokes its
/// outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// Fill the interior.
    #[default]
    Fill,
    /// Stroke along the outline.
    Stroke,
}

/// The shape of stroke endings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Cut the stroke off flat at the end point.
    #[default]
    Butt,
    /// Round the ending with a half circle.
    Round,
    /// Extend the ending by half the stroke width.
    Square,
}

/// Resolved style attributes for one drawing operation.
///
/// Paints are produced upstream during style resolution and are
/// read-only to the rasterizer; it only forwards them to the backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paint {
    /// Fill or stroke color.
    pub color: Color,
    /// Fill vs. stroke.
    pub style: Style,
    /// Stroke width in pixels; ignored by fill paints.
    pub stroke_width: f32,
    /// Stroke ending shape; ignored by fill paints.
    pub cap: LineCap,
    /// On/off dash lengths in pixels; `None` draws solid strokes.
    pub dash: Option<Vec<f32>>,
}

impl Paint {
    /// A solid fill paint.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            style: Style::Fill,
            stroke_width: 0.0,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    /// A solid stroke paint with the given width.
    #[must_use]
    pub const fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            style: Style::Stroke,
            stroke_width,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    /// The same paint with a different line cap.
    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// The same paint with a dash pattern of alternating on/off
    /// lengths.
    #[must_use]
    pub fn with_dash(mut self, dash: Vec<f32>) -> Self {
        self.dash = Some(dash);
        self
    }
}
