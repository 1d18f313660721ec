//! The drawing trait the rasterizer paints through.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::matrix::Matrix;
use crate::paint::Paint;
use crate::path::Path;

/// The primitive drawing operations a backend must provide.
///
/// This is the whole outbound contract of the rasterizer core. The
/// trait is object safe so that opaque element draw code can paint
/// through `&mut dyn Canvas` without knowing the backend type.
///
/// Implementations may panic if no output surface is bound when a
/// drawing operation arrives; binding before drawing is the caller's
/// contract, not a recoverable condition.
pub trait Canvas {
    /// Width of the bound surface in pixels.
    fn width(&self) -> u32;

    /// Height of the bound surface in pixels.
    fn height(&self) -> u32;

    /// Flood the whole surface with one color.
    fn fill_color(&mut self, color: Color);

    /// Draw a circle at integer pixel coordinates.
    fn draw_circle(&mut self, center_x: i32, center_y: i32, radius: i32, paint: &Paint);

    /// Fill or stroke a path in one operation.
    fn draw_path(&mut self, path: &Path, paint: &Paint);

    /// Blit an externally rendered bitmap through an affine transform.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, matrix: &Matrix);
}

/// A canvas that can be re-pointed at a fresh output surface.
///
/// Rendering pipelines reuse one canvas per rasterizer instance and
/// rebind it for every tile; the surface type is backend specific.
pub trait BindSurface: Canvas {
    /// The backend's output surface type.
    type Surface;

    /// Direct all subsequent drawing at the given surface, replacing
    /// any prior binding. Nothing queued is lost because a canvas holds
    /// no pending operations.
    fn bind(&mut self, surface: Self::Surface);

    /// Detach and return the bound surface, leaving the canvas
    /// unbound.
    fn take_surface(&mut self) -> Option<Self::Surface>;
}
