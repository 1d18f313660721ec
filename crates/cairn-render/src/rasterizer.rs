//! The rasterizer: one tile's instructions, one deterministic draw
//! sequence.

use std::collections::HashSet;

use cairn_graphics::{BindSurface, Color, Matrix, Paint, Path};
use cairn_model::{Point, Tile, parallel_path};

use crate::draw_list::{ShapePaint, WayDrawList};
use crate::element::MapElement;
use crate::shape::Shape;

/// Renders a tile's pre-computed drawing instructions onto a canvas in
/// cartographic draw order.
///
/// The rasterizer owns a reusable scratch [`Path`] and [`Matrix`],
/// both rebuilt in place across calls. It is therefore not reentrant:
/// one full draw sequence (fill, ways, elements) must complete before
/// the canvas is rebound, and concurrent tile renders need one
/// rasterizer each.
#[derive(Debug, Default)]
pub struct CanvasRasterizer<C: BindSurface> {
    canvas: C,
    path: Path,
    matrix: Matrix,
}

impl<C: BindSurface> CanvasRasterizer<C> {
    /// Create a rasterizer drawing through the given canvas.
    #[must_use]
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            path: Path::new(),
            matrix: Matrix::identity(),
        }
    }

    /// Direct all subsequent drawing at a fresh output surface.
    pub fn bind(&mut self, surface: C::Surface) {
        self.canvas.bind(surface);
    }

    /// Detach and return the rendered surface.
    pub fn take_surface(&mut self) -> Option<C::Surface> {
        self.canvas.take_surface()
    }

    /// Read access to the underlying canvas.
    #[must_use]
    pub const fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Paint the whole surface with a background color.
    ///
    /// Fully transparent colors are skipped without touching the
    /// backend: some backends treat "fill transparent" as "clear to
    /// black" rather than leaving the surface alone.
    pub fn fill(&mut self, color: Color) {
        if !color.is_transparent() {
            self.canvas.fill_color(color);
        }
    }

    /// Draw all way geometry of one tile.
    ///
    /// Layers draw in ascending order, levels in ascending order
    /// within each layer, and each level's shape sequence draws in
    /// reverse - the last shape pushed is painted first, underneath
    /// everything pushed before it. Layer dominates level dominates
    /// list position.
    pub fn draw_ways(&mut self, ways: &WayDrawList, tile: &Tile) {
        for layer in ways.layers() {
            for level in layer {
                for shape_paint in level.iter().rev() {
                    self.draw_shape_paint(shape_paint, tile);
                }
            }
        }
    }

    /// Draw the tile's map elements in priority order.
    ///
    /// The input set is unordered and duplicate-free; a copy is sorted
    /// with [`MapElement::render_order`] so the realized sequence is
    /// deterministic no matter how the set iterates. The
    /// highest-priority element draws last and stays visible on top of
    /// any overlap.
    pub fn draw_map_elements(&mut self, elements: &HashSet<MapElement>, tile: &Tile) {
        let mut ordered: Vec<&MapElement> = elements.iter().collect();
        ordered.sort_unstable_by(|a, b| a.render_order(b));

        let origin = tile.origin();
        for element in ordered {
            element.draw(&mut self.canvas, origin, &mut self.matrix);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw_shape_paint(&mut self, shape_paint: &ShapePaint, _tile: &Tile) {
        match &shape_paint.shape {
            Shape::Circle { center, radius } => self.canvas.draw_circle(
                center.x as i32,
                center.y as i32,
                *radius as i32,
                &shape_paint.paint,
            ),
            Shape::Polyline { rings } => {
                self.draw_polyline(rings, shape_paint.dy, &shape_paint.paint);
            }
        }
    }

    /// Accumulate every usable ring into the scratch path, then paint
    /// once so multi-ring geometry reaches the backend as one call.
    #[allow(clippy::cast_possible_truncation)]
    fn draw_polyline(&mut self, rings: &[Vec<Point>], dy: f64, paint: &Paint) {
        self.path.clear();

        for ring in rings {
            let offset_ring;
            let points: &[Point] = if dy == 0.0 {
                ring
            } else {
                offset_ring = parallel_path(ring, dy);
                &offset_ring
            };

            // Fewer than two points cannot form a segment.
            if points.len() < 2 {
                continue;
            }

            self.path.move_to(points[0].x as f32, points[0].y as f32);
            for point in &points[1..] {
                self.path.line_to(point.x as f32, point.y as f32);
            }
        }

        if !self.path.is_empty() {
            self.canvas.draw_path(&self.path, paint);
        }
    }
}
