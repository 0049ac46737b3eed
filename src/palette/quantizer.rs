//! Bucket quantization of a scalar field into palette colors

use image::{ImageBuffer, RgbImage};

use crate::io::error::{NoiseError, Result, invalid_config};
use crate::noise::sampler::ScalarField;
use crate::palette::color::Color;

/// Rendered RGB raster, row-major with explicit width and height
pub type PixelImage = RgbImage;

/// Palette position for a value in `[0, 1]`
///
/// Splits `[0, 1)` into `len` equal buckets; exactly 1.0 lands in the last one.
/// Callers guarantee `len >= 1`.
pub fn bucket_index(value: f64, len: usize) -> usize {
    // Negative and NaN values saturate to 0
    let bucket = (value * len as f64) as usize;
    bucket.min(len.saturating_sub(1))
}

/// Map every field value onto a palette color
///
/// # Errors
///
/// Returns an error if:
/// - `colors` is empty (`EmptyPalette`)
/// - The field is too large for an image buffer
pub fn quantize(field: &ScalarField, colors: &[Color]) -> Result<PixelImage> {
    if colors.is_empty() {
        return Err(NoiseError::EmptyPalette);
    }

    let (height, width) = field.dim();
    let raw: Vec<u8> = field
        .iter()
        .flat_map(|&value| {
            colors
                .get(bucket_index(value, colors.len()))
                .copied()
                .unwrap_or(Color::new(0, 0, 0))
                .0
        })
        .collect();

    let width = u32::try_from(width).map_err(|e| invalid_config("output_width", &width, &e))?;
    let height =
        u32::try_from(height).map_err(|e| invalid_config("output_height", &height, &e))?;

    ImageBuffer::from_raw(width, height, raw).ok_or_else(|| {
        invalid_config(
            "field",
            &format!("{width}x{height}"),
            &"pixel buffer does not match dimensions",
        )
    })
}
