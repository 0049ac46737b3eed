//! Progress display for batch renders

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Seeds: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rendered seeds and written files
///
/// A hidden manager accepts the same calls and draws nothing, so callers
/// do not branch on quiet mode.
pub struct ProgressManager {
    bar: ProgressBar,
    written: Vec<String>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to stderr
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(0),
            written: Vec::new(),
        }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden()),
            written: Vec::new(),
        }
    }

    /// Size the bar for `render_count` renders
    pub fn initialize(&mut self, render_count: usize) {
        self.bar.set_length(render_count as u64);
        self.bar.set_position(0);
        self.bar.set_style(BATCH_STYLE.clone());
    }

    /// Announce the seed being rendered
    pub fn start_render(&self, seed: u64) {
        self.bar.set_message(format!("seed {seed}"));
    }

    /// Record a written file and advance the bar
    pub fn complete_render(&mut self, path: &Path) {
        let name = path.display().to_string();
        self.bar.set_message(format!("✓ {name}"));
        self.written.push(name);
        self.bar.inc(1);
    }

    /// Files reported so far, in order
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// Number of completed renders
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the bar with a summary
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} file(s) written", self.written.len()));
    }
}
