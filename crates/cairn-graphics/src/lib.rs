//! Graphics backend boundary for the cairn map tile rasterizer.
//!
//! The rasterizer core never touches pixels itself. It records geometry
//! into a [`Path`], positions externally rendered bitmaps through a
//! [`Matrix`], and hands both to a [`Canvas`] implementation. This
//! crate defines that boundary and ships two implementations:
//!
//! ```text
//! Rasterizer → Canvas trait → SoftwareCanvas (tiny-skia pixels)
//!                           → RecordingCanvas (call log, for tests)
//! ```
//!
//! The trait is deliberately small: fill with a color, draw a circle,
//! draw a path, blit a transformed bitmap. Everything cartographic
//! (layers, levels, priorities) stays above this boundary.

pub mod bitmap;
pub mod canvas;
pub mod color;
pub mod error;
pub mod matrix;
pub mod paint;
pub mod path;
pub mod record;
pub mod software;

pub use bitmap::Bitmap;
pub use canvas::{BindSurface, Canvas};
pub use color::Color;
pub use error::GraphicsError;
pub use matrix::Matrix;
pub use paint::{LineCap, Paint, Style};
pub use path::{Path, PathVerb};
pub use record::{CanvasOp, RecordingCanvas};
pub use software::{SoftwareCanvas, Surface, create_surface, surface_to_rgba};
