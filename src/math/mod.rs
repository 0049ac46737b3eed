//! Mathematical utilities for noise sampling

/// Linear and smoothstep blending of lattice corners
pub mod interpolation;
/// Falloff power and threshold remapping of sampled values
pub mod shaping;
