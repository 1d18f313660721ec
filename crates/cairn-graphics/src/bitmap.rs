//! Externally rendered raster images.

use crate::color::Color;

/// Decoded RGBA pixel data for an externally rendered image.
///
/// Map element symbols and pre-rendered labels arrive at the canvas
/// boundary as bitmaps; the rasterizer positions them with its scratch
/// [`Matrix`](crate::Matrix) but never inspects their pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Straight-alpha RGBA bytes, `width * height * 4` of them.
    rgba_data: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap from decoded RGBA pixel data.
    ///
    /// # Panics
    /// Panics if `rgba_data` is not exactly `width * height * 4` bytes.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_data: Vec<u8>) -> Self {
        assert_eq!(
            rgba_data.len(),
            width as usize * height as usize * 4,
            "bitmap data length does not match {width}x{height} RGBA"
        );
        Self {
            width,
            height,
            rgba_data,
        }
    }

    /// Create a bitmap filled with a single color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let pixel = [color.r, color.g, color.b, color.a];
        let rgba_data = pixel.repeat(width as usize * height as usize);
        Self::new(width, height, rgba_data)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes in row-major order.
    #[must_use]
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }
}

#[cfg(test)]
mod tests {
    use super::Bitmap;
    use crate::color::Color;

    #[test]
    fn filled_bitmap_repeats_the_color() {
        let bitmap = Bitmap::filled(2, 2, Color::rgba(1, 2, 3, 4));
        assert_eq!(bitmap.rgba_data(), &[1, 2, 3, 4].repeat(4)[..]);
    }

    #[test]
    #[should_panic(expected = "bitmap data length")]
    fn mismatched_data_length_is_rejected() {
        drop(Bitmap::new(2, 2, vec![0; 3]));
    }
}
