//! Tileable value noise textures quantized into a user-defined palette
//!
//! A seeded lattice of random values is sampled per pixel with bilinear or
//! smoothstep interpolation and toroidal wraparound, shaped by a falloff power
//! and threshold band, then bucketed into an ordered color palette. The base
//! image tiles seamlessly; a 3x3 nearest-neighbor preview shows the seams.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Interpolation and shaping primitives
pub mod math;
/// Lattice generation and noise sampling
pub mod noise;
/// Colors, palettes, quantization, and palette editing
pub mod palette;
/// End-to-end rendering, sessions, and randomization
pub mod render;
/// Tiled preview composition and upscaling
pub mod spatial;

pub use io::error::{NoiseError, Result};
pub use noise::NoiseConfig;
pub use palette::{Color, Palette, PixelImage};
