//! Draw-order core of the cairn map tile rasterizer.
//!
//! The hard problem here is not pixels - the graphics backend owns
//! those - but *ordering*: turning one tile's pre-computed drawing
//! instructions into a single deterministic draw sequence that matches
//! the cartographic intent.
//!
//! ```text
//! upstream pipeline → WayDrawList ─┐
//!                     MapElements ─┤→ CanvasRasterizer → Canvas
//!                     Tile        ─┘
//! ```
//!
//! Two ordering contracts do all the work:
//!
//! - **Ways**: layers draw bottom-up, levels bottom-up within each
//!   layer, and each level's shape sequence draws *in reverse*, so
//!   upstream can append the most specific styling first and still get
//!   generic casings painted underneath.
//! - **Map elements**: an unordered, duplicate-free set is sorted by a
//!   single named priority policy so that the most important label is
//!   drawn last and stays visible on top of any overlap.
//!
//! The rasterizer is strictly single-threaded: it reuses one scratch
//! path and one scratch transform across calls, so concurrent tile
//! renders need one rasterizer instance each.

pub mod draw_list;
pub mod element;
pub mod rasterizer;
pub mod shape;

pub use draw_list::{ShapePaint, WayDrawList};
pub use element::{ElementDraw, MapElement, SymbolElement};
pub use rasterizer::CanvasRasterizer;
pub use shape::Shape;
