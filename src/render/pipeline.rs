//! End-to-end render: lattice, sampling, quantization, preview composition

use crate::io::error::Result;
use crate::noise::cache::{LatticeCache, LatticeKey};
use crate::noise::config::NoiseConfig;
use crate::noise::lattice::Lattice;
use crate::noise::sampler::{ScalarField, sample};
use crate::palette::quantizer::{PixelImage, quantize};
use crate::palette::ramp::Palette;
use crate::spatial::tiling::compose;

/// How the display raster is derived from the base image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Repeat the base image 3x3 before upscaling
    pub tiled: bool,
    /// Nearest-neighbor magnification
    pub upscale_factor: u32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            tiled: false,
            upscale_factor: crate::io::configuration::PREVIEW_UPSCALE,
        }
    }
}

/// Output of a full render
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The base image at output resolution, suitable for export
    pub image: PixelImage,
    /// The magnified, optionally tiled display raster
    pub preview: PixelImage,
}

/// Render the scalar field for `config` without caching
///
/// # Errors
///
/// Returns `InvalidConfig` if `config` fails validation
pub fn render_field(config: &NoiseConfig) -> Result<ScalarField> {
    config.validate()?;
    let lattice = Lattice::generate(config.seed, config.grid_y, config.grid_x)?;
    sample(&lattice, config)
}

/// Render the base image for `config` and `palette` without caching
///
/// # Errors
///
/// Returns `InvalidConfig` if `config` fails validation
pub fn render(config: &NoiseConfig, palette: &Palette) -> Result<PixelImage> {
    quantize(&render_field(config)?, palette.colors())
}

/// Renderer that memoizes lattices across renders
///
/// Each call is still a pure function of its arguments; the cache only
/// skips regenerating a lattice already built for the same seed and size.
#[derive(Default)]
pub struct Renderer {
    cache: LatticeCache,
}

impl Renderer {
    /// Create a renderer with an empty lattice cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Lattice cache, for inspecting hit statistics
    pub const fn cache(&self) -> &LatticeCache {
        &self.cache
    }

    /// Sample the scalar field for `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` fails validation
    pub fn field(&mut self, config: &NoiseConfig) -> Result<ScalarField> {
        config.validate()?;
        let key = LatticeKey::new(config.seed, config.grid_y, config.grid_x);
        let lattice = self.cache.get_or_generate(key)?;
        sample(lattice, config)
    }

    /// Render the base image
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` fails validation
    pub fn image(&mut self, config: &NoiseConfig, palette: &Palette) -> Result<PixelImage> {
        quantize(&self.field(config)?, palette.colors())
    }

    /// Render the base image and its display raster
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` fails validation or the
    /// preview size is invalid
    pub fn render(
        &mut self,
        config: &NoiseConfig,
        palette: &Palette,
        options: PreviewOptions,
    ) -> Result<Rendered> {
        let image = self.image(config, palette)?;
        let preview = compose(&image, options.tiled, options.upscale_factor)?;
        Ok(Rendered { image, preview })
    }
}
