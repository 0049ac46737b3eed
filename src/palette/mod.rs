//! Color palettes
//!
//! This module contains:
//! - Hex color parsing
//! - The ordered palette type
//! - Quantization of scalar fields into palette colors
//! - Palette edit operations and the pending-action slot

/// Hex color parsing and formatting
pub mod color;
/// Structural and color edits of a palette
pub mod editor;
/// Scalar field to pixel quantization
pub mod quantizer;
/// The ordered palette type
pub mod ramp;

pub use color::Color;
pub use quantizer::PixelImage;
pub use ramp::Palette;
