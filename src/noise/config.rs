//! Noise parameters supplied by the caller for each render

use crate::io::configuration::{
    DEFAULT_FALLOFF_POWER, DEFAULT_GRID_SIZE, DEFAULT_IMAGE_SIZE, DEFAULT_SCALE, DEFAULT_SEED,
    DEFAULT_THRESH_MAX, DEFAULT_THRESH_MIN, MIN_GRID_SIZE,
};
use crate::io::error::{Result, invalid_config};
use crate::math::interpolation::InterpolationMode;

/// Parameters of a single noise render
///
/// Plain data: the caller owns it and passes a snapshot into every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseConfig {
    /// Seed for the lattice generator
    pub seed: u64,
    /// Lattice columns
    pub grid_x: usize,
    /// Lattice rows
    pub grid_y: usize,
    /// Zoom divisor applied to pixel coordinates
    pub scale: u32,
    /// Exponent applied to interpolated values
    pub falloff_power: f64,
    /// Lower bound of the threshold band
    pub thresh_min: f64,
    /// Upper bound of the threshold band
    pub thresh_max: f64,
    /// Easing of fractional lattice offsets
    pub interpolation: InterpolationMode,
    /// Output width in pixels
    pub output_width: u32,
    /// Output height in pixels
    pub output_height: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            grid_x: DEFAULT_GRID_SIZE,
            grid_y: DEFAULT_GRID_SIZE,
            scale: DEFAULT_SCALE,
            falloff_power: DEFAULT_FALLOFF_POWER,
            thresh_min: DEFAULT_THRESH_MIN,
            thresh_max: DEFAULT_THRESH_MAX,
            interpolation: InterpolationMode::Linear,
            output_width: DEFAULT_IMAGE_SIZE,
            output_height: DEFAULT_IMAGE_SIZE,
        }
    }
}

impl NoiseConfig {
    /// Check every field against its domain
    ///
    /// Crossed thresholds (`thresh_max <= thresh_min`) are accepted; sampling
    /// maps them to an all-zero field.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - Either lattice dimension is below 2
    /// - `scale` is 0
    /// - `falloff_power` is not a positive finite number
    /// - A threshold lies outside `[0, 1]`
    /// - Either output dimension is 0
    pub fn validate(&self) -> Result<()> {
        if self.grid_x < MIN_GRID_SIZE {
            return Err(invalid_config(
                "grid_x",
                &self.grid_x,
                &format!("must be at least {MIN_GRID_SIZE}"),
            ));
        }
        if self.grid_y < MIN_GRID_SIZE {
            return Err(invalid_config(
                "grid_y",
                &self.grid_y,
                &format!("must be at least {MIN_GRID_SIZE}"),
            ));
        }
        if self.scale == 0 {
            return Err(invalid_config("scale", &self.scale, &"must be at least 1"));
        }
        if !(self.falloff_power.is_finite() && self.falloff_power > 0.0) {
            return Err(invalid_config(
                "falloff_power",
                &self.falloff_power,
                &"must be a positive finite number",
            ));
        }
        if !(0.0..=1.0).contains(&self.thresh_min) {
            return Err(invalid_config(
                "thresh_min",
                &self.thresh_min,
                &"must lie in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.thresh_max) {
            return Err(invalid_config(
                "thresh_max",
                &self.thresh_max,
                &"must lie in [0, 1]",
            ));
        }
        if self.output_width == 0 {
            return Err(invalid_config(
                "output_width",
                &self.output_width,
                &"must be at least 1",
            ));
        }
        if self.output_height == 0 {
            return Err(invalid_config(
                "output_height",
                &self.output_height,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    /// Lattice dimensions as `(rows, cols)`
    pub const fn grid_dimensions(&self) -> (usize, usize) {
        (self.grid_y, self.grid_x)
    }

    /// Output dimensions as `(width, height)`
    pub const fn output_dimensions(&self) -> (u32, u32) {
        (self.output_width, self.output_height)
    }
}
