//! A canvas that records calls instead of drawing.

use crate::bitmap::Bitmap;
use crate::canvas::{BindSurface, Canvas};
use crate::color::Color;
use crate::matrix::Matrix;
use crate::paint::Paint;
use crate::path::{Path, PathVerb};

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    /// A whole-surface fill.
    FillColor(
        /// The fill color.
        Color,
    ),
    /// A circle draw.
    DrawCircle {
        /// Horizontal center in pixels.
        center_x: i32,
        /// Vertical center in pixels.
        center_y: i32,
        /// Radius in pixels.
        radius: i32,
        /// The paint the circle was drawn with.
        paint: Paint,
    },
    /// A path draw, with the verbs the path held at call time.
    DrawPath {
        /// Snapshot of the path's verbs.
        verbs: Vec<PathVerb>,
        /// The paint the path was drawn with.
        paint: Paint,
    },
    /// A bitmap blit; only the dimensions and transform are kept.
    DrawBitmap {
        /// Bitmap width in pixels.
        width: u32,
        /// Bitmap height in pixels.
        height: u32,
        /// Transform components at call time.
        matrix: [f32; 6],
    },
}

/// A [`Canvas`] that appends every call to an operation log.
///
/// Draw-order contracts are about the *sequence* of backend calls, so
/// tests bind a `RecordingCanvas`, run the rasterizer, and assert on
/// [`ops`](Self::ops) instead of comparing pixels.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    /// Create a recording canvas reporting the given surface size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// The recorded calls in issue order.
    #[must_use]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Remove and return the recorded calls.
    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_color(&mut self, color: Color) {
        self.ops.push(CanvasOp::FillColor(color));
    }

    fn draw_circle(&mut self, center_x: i32, center_y: i32, radius: i32, paint: &Paint) {
        self.ops.push(CanvasOp::DrawCircle {
            center_x,
            center_y,
            radius,
            paint: paint.clone(),
        });
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.ops.push(CanvasOp::DrawPath {
            verbs: path.verbs().to_vec(),
            paint: paint.clone(),
        });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, matrix: &Matrix) {
        self.ops.push(CanvasOp::DrawBitmap {
            width: bitmap.width(),
            height: bitmap.height(),
            matrix: matrix.components(),
        });
    }
}

impl BindSurface for RecordingCanvas {
    type Surface = ();

    /// Binding a fresh surface clears the log.
    fn bind(&mut self, (): Self::Surface) {
        self.ops.clear();
    }

    fn take_surface(&mut self) -> Option<Self::Surface> {
        Some(())
    }
}
