//! Labels and icons with overlap priorities.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use cairn_graphics::{Bitmap, Canvas, Matrix};
use cairn_model::Point;

/// The rendering instructions of a map element, opaque to the
/// rasterizer.
///
/// `position` is the element's anchor already converted to tile-local
/// pixels; `matrix` is the rasterizer's scratch transform, free for
/// the implementation to reset and rebuild.
pub trait ElementDraw {
    /// Draw the element onto the canvas at the given tile-local
    /// position.
    fn draw(&self, canvas: &mut dyn Canvas, position: Point, matrix: &mut Matrix);
}

/// An externally rendered icon centered on its anchor point.
#[derive(Clone, Debug)]
pub struct SymbolElement {
    bitmap: Bitmap,
}

impl SymbolElement {
    /// Create a symbol from its rendered bitmap.
    #[must_use]
    pub const fn new(bitmap: Bitmap) -> Self {
        Self { bitmap }
    }
}

impl ElementDraw for SymbolElement {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn draw(&self, canvas: &mut dyn Canvas, position: Point, matrix: &mut Matrix) {
        let half_width = f64::from(self.bitmap.width()) / 2.0;
        let half_height = f64::from(self.bitmap.height()) / 2.0;
        matrix.reset();
        matrix.translate(
            (position.x - half_width) as f32,
            (position.y - half_height) as f32,
        );
        canvas.draw_bitmap(&self.bitmap, matrix);
    }
}

/// A label or icon placement with a draw priority.
///
/// Elements arrive at the rasterizer as a *set*: the same logical
/// element may be referenced from several tiles upstream and must be
/// drawn at most once. Identity is the creation-sequence number, which
/// also breaks priority ties deterministically.
#[derive(Clone)]
pub struct MapElement {
    anchor: Point,
    priority: i32,
    seq: u64,
    draw: Arc<dyn ElementDraw>,
}

impl MapElement {
    /// Create an element anchored at an absolute map pixel position.
    ///
    /// The creation-sequence number is taken from a process-wide
    /// counter, so elements created earlier sort (and draw) earlier
    /// among equal priorities.
    #[must_use]
    pub fn new(anchor: Point, priority: i32, draw: Arc<dyn ElementDraw>) -> Self {
        static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);
        Self {
            anchor,
            priority,
            seq: NEXT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            draw,
        }
    }

    /// The anchor position in absolute map pixels.
    #[must_use]
    pub const fn anchor(&self) -> Point {
        self.anchor
    }

    /// The overlap priority; higher values win visible placement.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// The creation-sequence number identifying this element.
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    /// The single comparison policy ordering elements for drawing.
    ///
    /// Ascending by priority, then by creation sequence: the
    /// highest-priority element is drawn *last* and therefore stays
    /// visible on top of anything it overlaps. The secondary key makes
    /// the order reproducible regardless of set iteration order.
    #[must_use]
    pub fn render_order(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }

    /// Draw the element relative to a tile origin, delegating to the
    /// opaque rendering instructions.
    pub fn draw(&self, canvas: &mut dyn Canvas, origin: Point, matrix: &mut Matrix) {
        self.draw.draw(canvas, self.anchor - origin, matrix);
    }
}

impl fmt::Debug for MapElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapElement")
            .field("anchor", &self.anchor)
            .field("priority", &self.priority)
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}

impl PartialEq for MapElement {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for MapElement {}

impl Hash for MapElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seq.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::HashSet;
    use std::sync::Arc;

    use cairn_graphics::{Bitmap, Color};
    use cairn_model::Point;

    use super::{MapElement, SymbolElement};

    fn element(priority: i32) -> MapElement {
        MapElement::new(
            Point::new(0.0, 0.0),
            priority,
            Arc::new(SymbolElement::new(Bitmap::filled(1, 1, Color::BLACK))),
        )
    }

    #[test]
    fn render_order_sorts_by_priority_first() {
        let low = element(1);
        let high = element(9);
        assert_eq!(low.render_order(&high), Ordering::Less);
        assert_eq!(high.render_order(&low), Ordering::Greater);
    }

    #[test]
    fn equal_priorities_fall_back_to_creation_order() {
        let first = element(5);
        let second = element(5);
        assert!(first.seq() < second.seq());
        assert_eq!(first.render_order(&second), Ordering::Less);
    }

    #[test]
    fn identity_is_the_sequence_number() {
        let element = element(3);
        let clone = element.clone();
        let mut set = HashSet::new();
        assert!(set.insert(element));
        assert!(!set.insert(clone), "a clone is the same logical element");
        assert_eq!(set.len(), 1);
    }
}
