//! Slippy-map tile addressing.

use std::hash::{Hash, Hasher};

use crate::point::Point;

/// The address of one map tile in the standard XYZ scheme, together
/// with the tile edge length in pixels.
///
/// `x` and `y` count tiles from the north-western corner of the world
/// map at the given zoom level; a zoom level `z` has `2^z` tiles per
/// axis.
///
/// Identity is the `(x, y, zoom_level)` address alone: the tile size
/// is a rendering parameter, and the same tile rendered at two sizes
/// is still one tile for caching and deduplication purposes.
#[derive(Clone, Copy, Debug)]
pub struct Tile {
    /// Horizontal tile number.
    pub x: u32,
    /// Vertical tile number.
    pub y: u32,
    /// Zoom level, 0 being the whole world in one tile.
    pub zoom_level: u8,
    /// Edge length of the tile in pixels.
    pub tile_size: u32,
}

impl Tile {
    /// Create a tile address.
    #[must_use]
    pub const fn new(x: u32, y: u32, zoom_level: u8, tile_size: u32) -> Self {
        Self {
            x,
            y,
            zoom_level,
            tile_size,
        }
    }

    /// The top-left corner of this tile in absolute map pixels at its
    /// zoom level.
    ///
    /// Element anchors are expressed in the same absolute pixel space,
    /// so subtracting the origin yields tile-local coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        let size = f64::from(self.tile_size);
        Point::new(f64::from(self.x) * size, f64::from(self.y) * size)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.zoom_level == other.zoom_level
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.zoom_level.hash(state);
    }
}
