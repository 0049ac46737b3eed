//! PNG encoding and export of rendered images

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::io::error::{NoiseError, Result};
use crate::palette::quantizer::PixelImage;

/// Encode `image` as PNG bytes in memory
///
/// # Errors
///
/// Returns `ImageExport` if encoding fails
pub fn encode_png(image: &PixelImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| NoiseError::ImageExport {
            path: "<memory>".into(),
            source: e,
        })?;
    Ok(bytes)
}

/// Save `image` as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &PixelImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| NoiseError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| NoiseError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
