//! A reusable path command buffer.

/// One path construction command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathVerb {
    /// Start a new contour at the given position.
    MoveTo {
        /// Horizontal pixel coordinate.
        x: f32,
        /// Vertical pixel coordinate.
        y: f32,
    },
    /// Extend the current contour with a straight segment.
    LineTo {
        /// Horizontal pixel coordinate.
        x: f32,
        /// Vertical pixel coordinate.
        y: f32,
    },
}

/// A sequence of path construction commands.
///
/// The rasterizer owns a single `Path` and rebuilds it in place for
/// every shape, so the verb buffer's allocation is reused across a
/// whole tile. Several contours may accumulate before the path is
/// painted once, which is how multi-ring polygons (outer ring plus
/// holes) reach the backend in one call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbs: Vec::new() }
    }

    /// Drop all verbs but keep the allocation.
    pub fn clear(&mut self) {
        self.verbs.clear();
    }

    /// Start a new contour.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::MoveTo { x, y });
    }

    /// Add a straight segment to the current contour.
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::LineTo { x, y });
    }

    /// The recorded verbs in insertion order.
    #[must_use]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// Whether the path holds no verbs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Path, PathVerb};

    #[test]
    fn clear_empties_the_path() {
        let mut path = Path::new();
        path.move_to(1.0, 2.0);
        path.line_to(3.0, 4.0);
        assert_eq!(path.verbs().len(), 2);

        path.clear();
        assert!(path.is_empty());
    }

    #[test]
    fn verbs_keep_insertion_order() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(5.0, 0.0);
        path.move_to(1.0, 1.0);

        assert_eq!(
            path.verbs(),
            &[
                PathVerb::MoveTo { x: 0.0, y: 0.0 },
                PathVerb::LineTo { x: 5.0, y: 0.0 },
                PathVerb::MoveTo { x: 1.0, y: 1.0 },
            ]
        );
    }
}
