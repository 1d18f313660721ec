//! RGBA colors.

/// A 32-bit color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
    /// Alpha channel, 0 = fully transparent, 255 = fully opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque color from its RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from all four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a color from `0xAARRGGBB` integer form.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack the color into `0xAARRGGBB` integer form.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Whether the color is fully transparent.
    ///
    /// Filling a surface with a fully transparent color must be skipped
    /// entirely: some backends treat "fill transparent" as "clear to
    /// black" instead of leaving the surface untouched.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Parse a CSS-style hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        match digits.len() {
            3 => {
                let mut nibbles = digits.chars().map(|c| c.to_digit(16));
                let r = u8::try_from(nibbles.next()??).ok()?;
                let g = u8::try_from(nibbles.next()??).ok()?;
                let b = u8::try_from(nibbles.next()??).ok()?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 | 8 => {
                let mut bytes = [0_u8; 4];
                bytes[3] = 255;
                for (slot, pair) in bytes.iter_mut().zip(digits.as_bytes().chunks(2)) {
                    let pair = std::str::from_utf8(pair).ok()?;
                    *slot = u8::from_str_radix(pair, 16).ok()?;
                }
                Some(Self::rgba(bytes[0], bytes[1], bytes[2], bytes[3]))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn argb_round_trips() {
        let color = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(Color::from_argb(color.to_argb()), color);
    }

    #[test]
    fn transparency_depends_only_on_alpha() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(Color::rgba(255, 0, 0, 0).is_transparent());
        assert!(!Color::rgba(0, 0, 0, 1).is_transparent());
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse_hex("#102030"), Some(Color::rgb(16, 32, 48)));
        assert_eq!(
            Color::parse_hex("#10203040"),
            Some(Color::rgba(16, 32, 48, 64))
        );
        assert_eq!(Color::parse_hex("red"), None);
        assert_eq!(Color::parse_hex("#12345"), None);
    }
}
