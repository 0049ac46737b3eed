//! Per-pixel value noise sampling
//!
//! Each output pixel is mapped into lattice space, blended from its four
//! surrounding lattice cells (wrapping at the edges so the base tile repeats
//! seamlessly), then shaped by falloff and threshold remapping. Pixels are
//! independent, so the `parallel` feature may evaluate rows in any order
//! without changing the result.

use ndarray::{Array2, Zip};

use crate::io::error::{Result, invalid_config};
use crate::math::interpolation::bilerp;
use crate::math::shaping::shape;
use crate::noise::config::NoiseConfig;
use crate::noise::lattice::Lattice;

/// Shaped noise values in `[0, 1]`, indexed `(y, x)`
pub type ScalarField = Array2<f64>;

/// Continuous lattice-space position of an output pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    /// Column of the top-left corner cell (before wrapping)
    pub x0: usize,
    /// Row of the top-left corner cell (before wrapping)
    pub y0: usize,
    /// Horizontal offset within the cell, in `[0, 1)`
    pub dx: f64,
    /// Vertical offset within the cell, in `[0, 1)`
    pub dy: f64,
}

/// Map output pixel `(x, y)` into lattice space
pub fn lattice_point(x: u32, y: u32, config: &NoiseConfig) -> LatticePoint {
    let scale = f64::from(config.scale);
    let fx = f64::from(x) / scale;
    let fy = f64::from(y) / scale;
    let cx = fx * config.grid_x as f64 / f64::from(config.output_width);
    let cy = fy * config.grid_y as f64 / f64::from(config.output_height);

    // Coordinates are non-negative, so truncation is floor
    let x0 = cx as usize;
    let y0 = cy as usize;

    LatticePoint {
        x0,
        y0,
        dx: cx - x0 as f64,
        dy: cy - y0 as f64,
    }
}

/// Interpolated and shaped value at output pixel `(x, y)`
///
/// Assumes `config` has been validated against `lattice`.
pub fn sample_pixel(lattice: &Lattice, config: &NoiseConfig, x: u32, y: u32) -> f64 {
    let point = lattice_point(x, y, config);
    let corners = lattice.corners(point.y0, point.x0);

    let dx = config.interpolation.ease(point.dx);
    let dy = config.interpolation.ease(point.dy);

    shape(
        bilerp(corners, dx, dy),
        config.falloff_power,
        config.thresh_min,
        config.thresh_max,
    )
}

/// Sample the whole output raster
///
/// # Errors
///
/// Returns `InvalidConfig` if:
/// - `config` fails validation (zero scale, zero output size, ...)
/// - The lattice dimensions differ from `config.grid_x` x `config.grid_y`
pub fn sample(lattice: &Lattice, config: &NoiseConfig) -> Result<ScalarField> {
    config.validate()?;
    if lattice.rows() != config.grid_y || lattice.cols() != config.grid_x {
        return Err(invalid_config(
            "lattice",
            &format!("{}x{}", lattice.cols(), lattice.rows()),
            &format!(
                "does not match configured grid {}x{}",
                config.grid_x, config.grid_y
            ),
        ));
    }

    let dims = (config.output_height as usize, config.output_width as usize);
    let mut field = ScalarField::zeros(dims);

    let zip = Zip::indexed(&mut field);
    let fill = |(y, x): (usize, usize), value: &mut f64| {
        *value = sample_pixel(lattice, config, x as u32, y as u32);
    };

    #[cfg(feature = "parallel")]
    zip.par_for_each(fill);
    #[cfg(not(feature = "parallel"))]
    zip.for_each(fill);

    Ok(field)
}
