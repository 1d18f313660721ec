//! Graphics errors.

use thiserror::Error;

/// Errors from surface management.
///
/// Drawing itself is infallible once a surface is bound; only creating
/// surfaces can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphicsError {
    /// A surface was requested with a zero-sized dimension.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}
