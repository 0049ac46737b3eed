//! Spatial composition of rendered images
//!
//! This module contains the 3x3 tiled preview and nearest-neighbor upscaling.

/// Tile replication and pixel-block magnification
pub mod tiling;

pub use tiling::compose;
