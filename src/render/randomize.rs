//! Random seeds, settings, and palettes for exploration

use rand::Rng;

use crate::io::configuration::{
    MAX_RANDOM_GRID_SIZE, MAX_RANDOM_PALETTE_LEN, MAX_RANDOM_SEED, MAX_RANDOM_THRESH_MIN,
    MIN_FALLOFF_POWER, MIN_GRID_SIZE, MIN_RANDOM_PALETTE_LEN, MIN_RANDOM_THRESH_GAP,
    RANDOM_FALLOFF_SPAN,
};
use crate::math::interpolation::InterpolationMode;
use crate::noise::config::NoiseConfig;
use crate::palette::color::Color;
use crate::palette::ramp::Palette;

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A fresh seed in `0..=10000`
pub fn random_seed<R: Rng>(rng: &mut R) -> u64 {
    rng.random_range(0..=MAX_RANDOM_SEED)
}

/// Copy of `base` with seed, lattice, shaping, and interpolation redrawn
///
/// Scale and output size are kept. Drawn values are rounded to hundredths
/// and always satisfy `thresh_min < thresh_max`.
pub fn randomize_settings<R: Rng>(rng: &mut R, base: &NoiseConfig) -> NoiseConfig {
    let seed = random_seed(rng);
    let grid_x = rng.random_range(MIN_GRID_SIZE..=MAX_RANDOM_GRID_SIZE);
    let grid_y = rng.random_range(MIN_GRID_SIZE..=MAX_RANDOM_GRID_SIZE);

    let thresh_min = round_hundredths(rng.random_range(0.0..=MAX_RANDOM_THRESH_MIN));
    let thresh_max =
        round_hundredths(rng.random_range(thresh_min + MIN_RANDOM_THRESH_GAP..=1.0)).min(1.0);
    // Low upper thresholds would otherwise leave an empty falloff range
    let falloff_ceiling = (thresh_max * RANDOM_FALLOFF_SPAN).max(MIN_FALLOFF_POWER);
    let falloff_draw = rng.random_range(MIN_FALLOFF_POWER..=falloff_ceiling);
    let falloff_power = round_hundredths(falloff_draw).max(MIN_FALLOFF_POWER);

    let interpolation = if rng.random_bool(0.5) {
        InterpolationMode::Smoothstep
    } else {
        InterpolationMode::Linear
    };

    NoiseConfig {
        seed,
        grid_x,
        grid_y,
        falloff_power,
        thresh_min,
        thresh_max,
        interpolation,
        ..*base
    }
}

/// Between 2 and 8 uniformly random colors
pub fn random_palette<R: Rng>(rng: &mut R) -> Palette {
    let len = rng.random_range(MIN_RANDOM_PALETTE_LEN..=MAX_RANDOM_PALETTE_LEN);
    let colors = (0..len)
        .map(|_| Color::from_u24(rng.random_range(0..=0x00FF_FFFF)))
        .collect();
    Palette::from_vec_unchecked(colors)
}
