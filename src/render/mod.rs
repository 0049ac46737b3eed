//! Render orchestration
//!
//! This module ties the pipeline together:
//! - Pure and memoized end-to-end renders
//! - Session cycles that apply queued palette edits before rendering
//! - Randomized seeds, settings, and palettes

/// Lattice to preview pipeline
pub mod pipeline;
/// Random exploration helpers
pub mod randomize;
/// Per-cycle state for interactive callers
pub mod session;

pub use pipeline::{PreviewOptions, Rendered, Renderer, render};
pub use session::Session;
