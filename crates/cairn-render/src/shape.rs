//! Drawable geometry kinds.

use cairn_model::Point;

/// Tile-local geometry of one drawable unit.
///
/// A closed sum type rather than runtime type inspection: adding a
/// shape kind extends this enum and the compiler points at every
/// dispatch site that needs a decision.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A circle, drawn filled or stroked depending on its paint.
    Circle {
        /// Center in tile-local pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
    /// One or more rings of straight segments.
    ///
    /// Multiple rings form a single logical shape (e.g. a polygon with
    /// holes); the rasterizer accumulates all of them into one path
    /// and paints once.
    Polyline {
        /// Rings of points in tile-local pixels. Rings with fewer than
        /// two points cannot form a segment and are skipped.
        rings: Vec<Vec<Point>>,
    },
}

impl Shape {
    /// A circle shape.
    #[must_use]
    pub const fn circle(center: Point, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    /// A single-ring polyline shape.
    #[must_use]
    pub fn line(points: Vec<Point>) -> Self {
        Self::Polyline {
            rings: vec![points],
        }
    }

    /// A multi-ring polyline shape.
    #[must_use]
    pub const fn polyline(rings: Vec<Vec<Point>>) -> Self {
        Self::Polyline { rings }
    }
}
