//! Hex color parsing and formatting

use std::fmt;
use std::str::FromStr;

use crate::io::error::{NoiseError, Result, invalid_color};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Build a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Build a color from the low 24 bits of `value`, as in `0xRRGGBB`
    pub const fn from_u24(value: u32) -> Self {
        Self([
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ])
    }

    /// Parse `#RRGGBB` or `RRGGBB`, case-insensitive
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` if the entry is not exactly six hex digits
    /// after an optional leading `#`
    pub fn parse_hex(entry: &str) -> Result<Self> {
        let digits = entry.strip_prefix('#').unwrap_or(entry);

        if digits.len() != 6 {
            return Err(invalid_color(
                entry,
                &format!("expected 6 hex digits, found {}", digits.len()),
            ));
        }
        // from_str_radix would accept a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_color(entry, &"contains a non-hex character"));
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| invalid_color(entry, &"unreadable hex pair"))
        };

        Ok(Self([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0[2]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Color {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        Self(color.0)
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self(pixel.0)
    }
}
