//! CLI entry point for the tileable value noise renderer

use clap::Parser;
use tilenoise::io::cli::{BatchRenderer, Cli};

fn main() -> tilenoise::Result<()> {
    let cli = Cli::parse();
    let mut renderer = BatchRenderer::new(cli);
    renderer.process()
}
