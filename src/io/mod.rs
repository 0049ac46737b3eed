//! Input/output: CLI, constants, errors, PNG export, and progress display

/// Command-line parsing and batch rendering
pub mod cli;
/// Defaults, control ranges, and output naming
pub mod configuration;
/// Error type shared by every module
pub mod error;
/// PNG encoding and export
pub mod image;
/// Progress display for batch renders
pub mod progress;
