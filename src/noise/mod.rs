//! Value noise generation
//!
//! This module contains the noise half of the pipeline:
//! - Render parameters and their validation
//! - Seeded lattice generation and memoization
//! - Per-pixel interpolated sampling into a scalar field

/// Lattice memoization keyed by seed and dimensions
pub mod cache;
/// Render parameters
pub mod config;
/// Seeded random lattice with toroidal addressing
pub mod lattice;
/// Interpolated, shaped sampling of the lattice
pub mod sampler;

pub use config::NoiseConfig;
pub use lattice::Lattice;
pub use sampler::ScalarField;
