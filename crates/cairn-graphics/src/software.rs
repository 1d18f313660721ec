//! CPU canvas backed by tiny-skia.

use tiny_skia::{
    FillRule, Pixmap, PixmapPaint, Stroke, StrokeDash, Transform,
};

use crate::bitmap::Bitmap;
use crate::canvas::{BindSurface, Canvas};
use crate::color::Color;
use crate::error::GraphicsError;
use crate::matrix::Matrix;
use crate::paint::{LineCap, Paint, Style};
use crate::path::{Path, PathVerb};

/// The software backend's output surface: a tiny-skia pixel map.
///
/// Re-exported so that consumers of [`SoftwareCanvas`] do not need a
/// direct tiny-skia dependency.
pub type Surface = Pixmap;

/// Allocate a blank, fully transparent surface.
///
/// # Errors
/// Returns [`GraphicsError::InvalidDimensions`] if either dimension is
/// zero.
pub fn create_surface(width: u32, height: u32) -> Result<Surface, GraphicsError> {
    Pixmap::new(width, height).ok_or(GraphicsError::InvalidDimensions { width, height })
}

/// Convert a rendered surface into straight-alpha RGBA bytes, suitable
/// for PNG encoding.
#[must_use]
pub fn surface_to_rgba(surface: &Surface) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(surface.pixels().len() * 4);
    for pixel in surface.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    rgba
}

/// An anti-aliased CPU [`Canvas`] drawing into a [`Pixmap`].
///
/// Paths are filled with the even-odd rule so that a multi-contour
/// path renders polygon holes correctly. The canvas starts unbound;
/// [`bind`](BindSurface::bind) a surface before drawing.
#[derive(Debug, Default)]
pub struct SoftwareCanvas {
    surface: Option<Pixmap>,
}

impl SoftwareCanvas {
    /// Create an unbound software canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self { surface: None }
    }

    /// Create a canvas already bound to a surface.
    #[must_use]
    pub const fn with_surface(surface: Surface) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Read access to the bound surface, if any.
    #[must_use]
    pub const fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    fn surface_mut(&mut self) -> &mut Pixmap {
        self.surface
            .as_mut()
            .expect("drawing on a software canvas with no surface bound")
    }

    fn paint_geometry(&mut self, skia_path: &tiny_skia::Path, paint: &Paint) {
        let mut skia_paint = tiny_skia::Paint::default();
        skia_paint.set_color_rgba8(paint.color.r, paint.color.g, paint.color.b, paint.color.a);
        skia_paint.anti_alias = true;

        let surface = self.surface_mut();
        match paint.style {
            Style::Fill => {
                surface.fill_path(
                    skia_path,
                    &skia_paint,
                    FillRule::EvenOdd,
                    Transform::identity(),
                    None,
                );
            }
            Style::Stroke => {
                let stroke = Stroke {
                    width: paint.stroke_width,
                    line_cap: match paint.cap {
                        LineCap::Butt => tiny_skia::LineCap::Butt,
                        LineCap::Round => tiny_skia::LineCap::Round,
                        LineCap::Square => tiny_skia::LineCap::Square,
                    },
                    dash: paint
                        .dash
                        .as_ref()
                        .and_then(|dash| StrokeDash::new(dash.clone(), 0.0)),
                    ..Stroke::default()
                };
                surface.stroke_path(
                    skia_path,
                    &skia_paint,
                    &stroke,
                    Transform::identity(),
                    None,
                );
            }
        }
    }
}

impl Canvas for SoftwareCanvas {
    /// # Panics
    /// Panics if no surface is bound.
    fn width(&self) -> u32 {
        self.surface
            .as_ref()
            .expect("no surface bound to software canvas")
            .width()
    }

    /// # Panics
    /// Panics if no surface is bound.
    fn height(&self) -> u32 {
        self.surface
            .as_ref()
            .expect("no surface bound to software canvas")
            .height()
    }

    fn fill_color(&mut self, color: Color) {
        self.surface_mut().fill(tiny_skia::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_circle(&mut self, center_x: i32, center_y: i32, radius: i32, paint: &Paint) {
        if radius <= 0 {
            return;
        }
        let mut builder = tiny_skia::PathBuilder::new();
        builder.push_circle(center_x as f32, center_y as f32, radius as f32);
        if let Some(skia_path) = builder.finish() {
            self.paint_geometry(&skia_path, paint);
        }
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let mut builder = tiny_skia::PathBuilder::new();
        for verb in path.verbs() {
            match *verb {
                PathVerb::MoveTo { x, y } => builder.move_to(x, y),
                PathVerb::LineTo { x, y } => builder.line_to(x, y),
            }
        }
        if let Some(skia_path) = builder.finish() {
            self.paint_geometry(&skia_path, paint);
        }
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, matrix: &Matrix) {
        let Some(mut source) = Pixmap::new(bitmap.width(), bitmap.height()) else {
            return;
        };
        for (target, chunk) in source
            .pixels_mut()
            .iter_mut()
            .zip(bitmap.rgba_data().chunks_exact(4))
        {
            *target = tiny_skia::ColorU8::from_rgba(chunk[0], chunk[1], chunk[2], chunk[3])
                .premultiply();
        }

        let [sx, kx, tx, ky, sy, ty] = matrix.components();
        let transform = Transform::from_row(sx, ky, kx, sy, tx, ty);
        self.surface_mut().draw_pixmap(
            0,
            0,
            source.as_ref(),
            &PixmapPaint::default(),
            transform,
            None,
        );
    }
}

impl BindSurface for SoftwareCanvas {
    type Surface = Surface;

    fn bind(&mut self, surface: Self::Surface) {
        self.surface = Some(surface);
    }

    fn take_surface(&mut self) -> Option<Self::Surface> {
        self.surface.take()
    }
}
