//! Render cycles for an interactive caller
//!
//! A session owns the caller-facing state (noise parameters, palette, queued
//! edits) and turns it into one render per cycle. The core functions it calls
//! only ever see immutable snapshots.

use crate::io::error::Result;
use crate::noise::config::NoiseConfig;
use crate::palette::color::Color;
use crate::palette::editor::{ActionSlot, PaletteAction};
use crate::palette::ramp::Palette;
use crate::render::pipeline::{PreviewOptions, Rendered, Renderer};

/// Caller state plus a memoizing renderer
#[derive(Default)]
pub struct Session {
    /// Noise parameters used by the next cycle
    pub config: NoiseConfig,
    /// Display options used by the next cycle
    pub preview: PreviewOptions,
    palette: Palette,
    action: ActionSlot,
    color_edits: Vec<(usize, Color)>,
    renderer: Renderer,
}

impl Session {
    /// Start a session from explicit parameters
    pub fn new(config: NoiseConfig, palette: Palette, preview: PreviewOptions) -> Self {
        Self {
            config,
            preview,
            palette,
            ..Self::default()
        }
    }

    /// Palette as of the last completed cycle
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Renderer and its lattice cache
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Queue a structural palette edit for the next cycle
    ///
    /// Returns the action it displaced; only the latest one is applied.
    pub const fn queue_action(&mut self, action: PaletteAction) -> Option<PaletteAction> {
        self.action.submit(action)
    }

    /// Queue a color replacement for the next cycle
    pub fn queue_color(&mut self, index: usize, color: Color) {
        self.color_edits.push((index, color));
    }

    /// Apply queued edits, then render with the resulting palette
    ///
    /// Queued edits are consumed whether or not the cycle succeeds. When an
    /// edit fails the palette is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A queued edit addresses an invalid index
    /// - The configuration fails validation
    pub fn cycle(&mut self) -> Result<Rendered> {
        let edits = std::mem::take(&mut self.color_edits);
        self.palette = self.action.apply_cycle(&self.palette, &edits)?;
        self.renderer.render(&self.config, &self.palette, self.preview)
    }
}
