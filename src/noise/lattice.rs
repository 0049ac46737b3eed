//! Seeded lattice of random control values
//!
//! Values are drawn from `ChaCha8Rng::seed_from_u64(seed)` as `f64` samples in
//! `[0, 1)`, filled row-major. ChaCha8 output is stable across platforms and
//! releases, so a seed names the same lattice everywhere.

use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::io::error::{Result, invalid_config};

/// Grid of random scalars in `[0, 1)` with toroidal addressing
///
/// Immutable once generated; a change of seed or dimensions means a new lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    values: Array2<f64>,
}

impl Lattice {
    /// Generate a lattice of `grid_y` rows by `grid_x` columns
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either dimension is 0
    pub fn generate(seed: u64, grid_y: usize, grid_x: usize) -> Result<Self> {
        if grid_x == 0 {
            return Err(invalid_config("grid_x", &grid_x, &"must be at least 1"));
        }
        if grid_y == 0 {
            return Err(invalid_config("grid_y", &grid_y, &"must be at least 1"));
        }
        let cell_count = grid_y
            .checked_mul(grid_x)
            .ok_or_else(|| invalid_config("grid_x", &grid_x, &"lattice size overflows"))?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let raw: Vec<f64> = (0..cell_count).map(|_| rng.random::<f64>()).collect();

        let values = Array2::from_shape_vec((grid_y, grid_x), raw)
            .map_err(|e| invalid_config("grid_x", &grid_x, &e))?;

        Ok(Self { values })
    }

    /// Wrap an existing array of values
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the array has no rows or no columns
    pub fn from_values(values: Array2<f64>) -> Result<Self> {
        let (rows, cols) = values.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_config(
                "lattice",
                &format!("{rows}x{cols}"),
                &"must have at least one row and column",
            ));
        }
        Ok(Self { values })
    }

    /// Number of rows (`grid_y`)
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns (`grid_x`)
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Raw values, indexed `(row, col)`
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Value at `(row, col)` with both indices taken modulo the lattice size
    pub fn wrapped(&self, row: usize, col: usize) -> f64 {
        self.values
            .get((row % self.rows(), col % self.cols()))
            .copied()
            .unwrap_or(0.0)
    }

    /// The four cells surrounding lattice cell `(y0, x0)`
    ///
    /// Ordered top-left, top-right, bottom-left, bottom-right; the `+1`
    /// neighbors wrap past the last row and column back to 0.
    pub fn corners(&self, y0: usize, x0: usize) -> [f64; 4] {
        [
            self.wrapped(y0, x0),
            self.wrapped(y0, x0 + 1),
            self.wrapped(y0 + 1, x0),
            self.wrapped(y0 + 1, x0 + 1),
        ]
    }
}
