//! Tiled preview assembly and nearest-neighbor upscaling
//!
//! Tiles are pasted as exact pixel copies with no blending at the seams; any
//! seamlessness comes from the sampler's wraparound.

use image::imageops;

use crate::io::configuration::TILE_REPEAT;
use crate::io::error::{Result, invalid_config};
use crate::palette::quantizer::PixelImage;

fn scaled_dimension(parameter: &'static str, size: u32, factor: u32) -> Result<u32> {
    size.checked_mul(factor).ok_or_else(|| {
        let reason = format!("overflows when scaled by {factor}");
        invalid_config(parameter, &size, &reason)
    })
}

/// Repeat `image` `repeats` times along each axis
///
/// # Errors
///
/// Returns `InvalidConfig` if `repeats` is 0 or the canvas size overflows
pub fn tile(image: &PixelImage, repeats: u32) -> Result<PixelImage> {
    if repeats == 0 {
        return Err(invalid_config("repeats", &repeats, &"must be at least 1"));
    }
    let (width, height) = image.dimensions();
    let mut canvas = PixelImage::new(
        scaled_dimension("width", width, repeats)?,
        scaled_dimension("height", height, repeats)?,
    );

    for ty in 0..repeats {
        for tx in 0..repeats {
            imageops::replace(
                &mut canvas,
                image,
                i64::from(tx * width),
                i64::from(ty * height),
            );
        }
    }

    Ok(canvas)
}

/// Magnify `image` so each pixel becomes a `factor` x `factor` block
///
/// # Errors
///
/// Returns `InvalidConfig` if `factor` is 0 or the result size overflows
pub fn upscale_nearest(image: &PixelImage, factor: u32) -> Result<PixelImage> {
    if factor == 0 {
        return Err(invalid_config("upscale_factor", &factor, &"must be at least 1"));
    }
    let (width, height) = image.dimensions();
    let scaled_width = scaled_dimension("width", width, factor)?;
    let scaled_height = scaled_dimension("height", height, factor)?;

    Ok(PixelImage::from_fn(scaled_width, scaled_height, |x, y| {
        *image.get_pixel(x / factor, y / factor)
    }))
}

/// Build the display raster: optionally tile 3x3, then upscale
///
/// # Errors
///
/// Returns `InvalidConfig` if `upscale_factor` is 0 or the result size overflows
pub fn compose(image: &PixelImage, tiled: bool, upscale_factor: u32) -> Result<PixelImage> {
    if tiled {
        upscale_nearest(&tile(image, TILE_REPEAT)?, upscale_factor)
    } else {
        upscale_nearest(image, upscale_factor)
    }
}
