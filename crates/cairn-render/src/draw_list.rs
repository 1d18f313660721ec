//! The per-tile way drawing structure.

use cairn_graphics::Paint;

use crate::shape::Shape;

/// One drawable unit: geometry plus the paint to draw it with.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapePaint {
    /// The geometry to draw.
    pub shape: Shape,
    /// Resolved style attributes.
    pub paint: Paint,
    /// Signed perpendicular offset in pixels. Nonzero values draw the
    /// polyline displaced sideways from its base geometry, which is
    /// how several parallel strokes (road casings) share one way.
    pub dy: f64,
}

impl ShapePaint {
    /// A shape drawn on its base geometry.
    #[must_use]
    pub const fn new(shape: Shape, paint: Paint) -> Self {
        Self {
            shape,
            paint,
            dy: 0.0,
        }
    }

    /// A shape drawn offset sideways by `dy` pixels.
    #[must_use]
    pub const fn with_offset(shape: Shape, paint: Paint, dy: f64) -> Self {
        Self { shape, paint, dy }
    }
}

/// All way geometry of one tile, ordered for drawing.
///
/// Three nested orderings, all back-to-front: layers (coarse z-order
/// buckets), levels within each layer (e.g. casing stroke below fill
/// stroke), and the shape sequence within each level, which draws in
/// *reverse* insertion order - the last shape pushed is painted first.
///
/// Every layer holds the same number of levels. The constructors
/// enforce this, so `draw_ways` can trust the structure.
#[derive(Clone, Debug, Default)]
pub struct WayDrawList {
    layers: Vec<Vec<Vec<ShapePaint>>>,
}

impl WayDrawList {
    /// Create an empty draw list with the given dimensions.
    #[must_use]
    pub fn with_dimensions(layers: usize, levels: usize) -> Self {
        Self {
            layers: vec![vec![Vec::new(); levels]; layers],
        }
    }

    /// Wrap a pre-built nesting of `layers[layer][level][index]`.
    ///
    /// # Panics
    /// Panics if any layer's level count differs from the first
    /// layer's - a structural precondition the upstream producer must
    /// guarantee, never silently repaired here.
    #[must_use]
    pub fn from_layers(layers: Vec<Vec<Vec<ShapePaint>>>) -> Self {
        if let Some(first) = layers.first() {
            let levels = first.len();
            for (index, layer) in layers.iter().enumerate() {
                assert_eq!(
                    layer.len(),
                    levels,
                    "layer {index} holds {} levels, expected {levels}",
                    layer.len()
                );
            }
        }
        Self { layers }
    }

    /// Append a shape to one (layer, level) bucket.
    ///
    /// # Panics
    /// Panics if `layer` or `level` is out of range.
    pub fn push(&mut self, layer: usize, level: usize, shape_paint: ShapePaint) {
        self.layers[layer][level].push(shape_paint);
    }

    /// Number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of levels per layer.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.layers.first().map_or(0, Vec::len)
    }

    /// The layer/level nesting in drawing order.
    #[must_use]
    pub fn layers(&self) -> &[Vec<Vec<ShapePaint>>] {
        &self.layers
    }
}
