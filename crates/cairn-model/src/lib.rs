//! Geometry model for the cairn map tile rasterizer.
//!
//! This crate provides the leaf types every other component consumes:
//! - **[`Point`]** - a position in map pixel coordinates
//! - **[`Tile`]** - a slippy-map tile address and its pixel origin
//! - **[`parallel_path`]** - perpendicular polyline offsetting for
//!   drawing parallel strokes (road casings, one-way arrows)
//!
//! It deliberately has no dependencies so that geometry can be shared
//! between the rasterizer core, graphics backends, and any upstream
//! pipeline without pulling in rendering machinery.

pub mod geometry;
pub mod point;
pub mod tile;

pub use geometry::parallel_path;
pub use point::Point;
pub use tile::Tile;
