//! Ordered palette mapping low-to-high noise values onto colors

use crate::io::configuration::DEFAULT_PALETTE;
use crate::io::error::{NoiseError, Result, WithContext};
use crate::palette::color::Color;

/// Non-empty ordered list of colors
///
/// The first color covers the lowest noise values and the last the highest.
/// Edits go through [`crate::palette::editor`], which returns new palettes
/// and never mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from colors
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` if `colors` is empty
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(NoiseError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a palette from hex entries such as `"#ff0000"`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An entry is not a valid hex color (the error names its position)
    /// - `entries` is empty
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let colors = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Color::parse_hex(entry.as_ref()).with_entry_index(index))
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Colors in ramp order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors, always at least 1
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Entries in `#rrggbb` form
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    pub(crate) const fn from_vec_unchecked(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_vec_unchecked(
            DEFAULT_PALETTE
                .iter()
                .filter_map(|entry| Color::parse_hex(entry).ok())
                .collect(),
        )
    }
}
