//! Palette editing operations and the single pending structural edit
//!
//! Every operation takes a palette by reference and returns a new one, so a
//! collaborator holding the old palette never observes a half-applied edit.
//! Moving the first entry up or the last entry down returns an unchanged copy;
//! indices past the end fail with `InvalidIndex`.

use crate::io::configuration::NEW_COLOR;
use crate::io::error::{NoiseError, Result};
use crate::palette::color::Color;
use crate::palette::ramp::Palette;

fn check_index(palette: &Palette, operation: &'static str, index: usize) -> Result<()> {
    if index < palette.len() {
        Ok(())
    } else {
        Err(NoiseError::InvalidIndex {
            operation,
            index,
            len: palette.len(),
        })
    }
}

/// Palette with `color` added at the end
pub fn append(palette: &Palette, color: Color) -> Palette {
    let mut colors = palette.colors().to_vec();
    colors.push(color);
    Palette::from_vec_unchecked(colors)
}

/// Palette without the entry at `index`
///
/// # Errors
///
/// Returns `InvalidIndex` if `index` is out of range or the palette has a single entry
pub fn remove_at(palette: &Palette, index: usize) -> Result<Palette> {
    check_index(palette, "remove", index)?;
    if palette.len() == 1 {
        return Err(NoiseError::InvalidIndex {
            operation: "remove",
            index,
            len: 1,
        });
    }

    let mut colors = palette.colors().to_vec();
    colors.remove(index);
    Ok(Palette::from_vec_unchecked(colors))
}

/// Palette with entries `index` and `index - 1` swapped
///
/// # Errors
///
/// Returns `InvalidIndex` if `index` is out of range
pub fn move_up(palette: &Palette, index: usize) -> Result<Palette> {
    check_index(palette, "move up", index)?;

    let mut colors = palette.colors().to_vec();
    if index > 0 {
        colors.swap(index, index - 1);
    }
    Ok(Palette::from_vec_unchecked(colors))
}

/// Palette with entries `index` and `index + 1` swapped
///
/// # Errors
///
/// Returns `InvalidIndex` if `index` is out of range
pub fn move_down(palette: &Palette, index: usize) -> Result<Palette> {
    check_index(palette, "move down", index)?;

    let mut colors = palette.colors().to_vec();
    if index + 1 < colors.len() {
        colors.swap(index, index + 1);
    }
    Ok(Palette::from_vec_unchecked(colors))
}

/// Palette with the entry at `index` replaced by `color`
///
/// # Errors
///
/// Returns `InvalidIndex` if `index` is out of range
pub fn replace_at(palette: &Palette, index: usize, color: Color) -> Result<Palette> {
    check_index(palette, "replace", index)?;

    let mut colors = palette.colors().to_vec();
    if let Some(slot) = colors.get_mut(index) {
        *slot = color;
    }
    Ok(Palette::from_vec_unchecked(colors))
}

/// Apply a batch of color replacements
///
/// Replacements never change the palette length, so any number of them can be
/// applied in one cycle. Later edits to the same index win.
///
/// # Errors
///
/// Returns `InvalidIndex` for the first out-of-range edit
pub fn replace_all(palette: &Palette, edits: &[(usize, Color)]) -> Result<Palette> {
    let mut colors = palette.colors().to_vec();
    for &(index, color) in edits {
        let len = colors.len();
        let slot = colors.get_mut(index).ok_or(NoiseError::InvalidIndex {
            operation: "replace",
            index,
            len,
        })?;
        *slot = color;
    }
    Ok(Palette::from_vec_unchecked(colors))
}

/// Structural palette edit, one of which may be applied per render cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    /// Append the default new color
    Add,
    /// Remove the entry at the index
    Remove(usize),
    /// Swap the entry with its predecessor
    MoveUp(usize),
    /// Swap the entry with its successor
    MoveDown(usize),
}

impl PaletteAction {
    /// Apply the edit to `palette`
    ///
    /// # Errors
    ///
    /// Propagates `InvalidIndex` from the underlying operation
    pub fn apply(self, palette: &Palette) -> Result<Palette> {
        match self {
            Self::Add => {
                let color = Color::parse_hex(NEW_COLOR)?;
                Ok(append(palette, color))
            }
            Self::Remove(index) => remove_at(palette, index),
            Self::MoveUp(index) => move_up(palette, index),
            Self::MoveDown(index) => move_down(palette, index),
        }
    }
}

/// Holds at most one pending structural edit until the next render cycle
///
/// Submitting again before the cycle replaces the earlier action, so index
/// semantics always refer to the palette the user saw.
#[derive(Debug, Default, Clone)]
pub struct ActionSlot {
    pending: Option<PaletteAction>,
}

impl ActionSlot {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Queue `action`, returning the action it displaced, if any
    pub const fn submit(&mut self, action: PaletteAction) -> Option<PaletteAction> {
        self.pending.replace(action)
    }

    /// The queued action without consuming it
    pub const fn peek(&self) -> Option<PaletteAction> {
        self.pending
    }

    /// Whether an action is waiting
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the queued action
    pub const fn take(&mut self) -> Option<PaletteAction> {
        self.pending.take()
    }

    /// Run one edit cycle: bulk color replacements, then the pending action
    ///
    /// The slot is empty afterwards even when the cycle fails.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` from a color replacement or the structural action
    pub fn apply_cycle(&mut self, palette: &Palette, edits: &[(usize, Color)]) -> Result<Palette> {
        let action = self.take();
        let recolored = replace_all(palette, edits)?;
        match action {
            Some(action) => action.apply(&recolored),
            None => Ok(recolored),
        }
    }
}
