//! Command-line interface for rendering noise textures to PNG files

use crate::io::configuration::{
    DEFAULT_FALLOFF_POWER, DEFAULT_GRID_SIZE, DEFAULT_IMAGE_SIZE, DEFAULT_OUTPUT, DEFAULT_SCALE,
    DEFAULT_SEED, DEFAULT_THRESH_MAX, DEFAULT_THRESH_MIN, MAX_FALLOFF_POWER, MAX_GRID_SIZE,
    MAX_IMAGE_SIZE, MAX_SCALE, MIN_FALLOFF_POWER, MIN_GRID_SIZE, MIN_IMAGE_SIZE, PREVIEW_SUFFIX,
    PREVIEW_UPSCALE,
};
use crate::io::error::{Result, invalid_config};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::math::interpolation::InterpolationMode;
use crate::noise::config::NoiseConfig;
use crate::palette::color::Color;
use crate::palette::ramp::Palette;
use crate::render::pipeline::{PreviewOptions, Renderer};
use crate::render::randomize::{random_palette, random_seed, randomize_settings};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tilenoise")]
#[command(
    author,
    version,
    about = "Render tileable value noise quantized into a color palette"
)]
/// Command-line arguments for the noise renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG path
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Zoom divisor applied to pixel coordinates
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Lattice columns
    #[arg(short = 'x', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_x: usize,

    /// Lattice rows
    #[arg(short = 'y', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_y: usize,

    /// Exponent applied to interpolated values
    #[arg(short, long, default_value_t = DEFAULT_FALLOFF_POWER)]
    pub falloff: f64,

    /// Lower bound of the threshold band
    #[arg(long, default_value_t = DEFAULT_THRESH_MIN)]
    pub thresh_min: f64,

    /// Upper bound of the threshold band
    #[arg(long, default_value_t = DEFAULT_THRESH_MAX)]
    pub thresh_max: f64,

    /// Easing of fractional lattice offsets
    #[arg(short, long, value_enum, default_value_t = InterpolationMode::Linear)]
    pub interpolation: InterpolationMode,

    /// Output width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub width: u32,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub height: u32,

    /// Comma-separated palette, low to high (e.g. "#ffffff,#000000")
    #[arg(short, long, value_delimiter = ',')]
    pub palette: Vec<Color>,

    /// Also write an upscaled preview next to the output
    #[arg(long)]
    pub preview: bool,

    /// Repeat the preview 3x3 to check seams
    #[arg(short, long)]
    pub tiled: bool,

    /// Nearest-neighbor magnification of the preview
    #[arg(short, long, default_value_t = PREVIEW_UPSCALE)]
    pub upscale: u32,

    /// Number of consecutive seeds to render
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u64,

    /// Draw a fresh random seed before rendering
    #[arg(long)]
    pub random_seed: bool,

    /// Randomize seed, lattice size, shaping, and interpolation
    #[arg(short, long)]
    pub randomize: bool,

    /// Replace the palette with 2 to 8 random colors
    #[arg(long)]
    pub random_palette: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn check_range<T>(parameter: &'static str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(invalid_config(
            parameter,
            &value,
            &format!("must lie in [{min}, {max}]"),
        ))
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Noise parameters from the flags, within the ranges the controls offer
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a flag lies outside its control range or
    /// the result fails validation
    pub fn noise_config(&self) -> Result<NoiseConfig> {
        check_range("scale", self.scale, 1, MAX_SCALE)?;
        check_range("grid_x", self.grid_x, MIN_GRID_SIZE, MAX_GRID_SIZE)?;
        check_range("grid_y", self.grid_y, MIN_GRID_SIZE, MAX_GRID_SIZE)?;
        check_range(
            "falloff_power",
            self.falloff,
            MIN_FALLOFF_POWER,
            MAX_FALLOFF_POWER,
        )?;
        check_range("output_width", self.width, MIN_IMAGE_SIZE, MAX_IMAGE_SIZE)?;
        check_range("output_height", self.height, MIN_IMAGE_SIZE, MAX_IMAGE_SIZE)?;

        let config = NoiseConfig {
            seed: self.seed,
            grid_x: self.grid_x,
            grid_y: self.grid_y,
            scale: self.scale,
            falloff_power: self.falloff,
            thresh_min: self.thresh_min,
            thresh_max: self.thresh_max,
            interpolation: self.interpolation,
            output_width: self.width,
            output_height: self.height,
        };
        config.validate()?;
        Ok(config)
    }

    /// Palette from the flags, or the default ramp when none is given
    ///
    /// # Errors
    ///
    /// Returns an error if the listed colors do not form a valid palette
    pub fn palette(&self) -> Result<Palette> {
        if self.palette.is_empty() {
            Ok(Palette::default())
        } else {
            Palette::new(self.palette.clone())
        }
    }

    /// Preview options from the flags
    pub const fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            tiled: self.tiled,
            upscale_factor: self.upscale,
        }
    }
}

/// Renders one or more seeds to PNG files with progress tracking
pub struct BatchRenderer {
    cli: Cli,
    renderer: Renderer,
    progress: ProgressManager,
}

impl BatchRenderer {
    /// Create a batch renderer for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            renderer: Renderer::new(),
            progress,
        }
    }

    /// Paths written so far
    pub fn written(&self) -> &[String] {
        self.progress.written()
    }

    /// Render every requested seed
    ///
    /// # Errors
    ///
    /// Returns an error if the flags are invalid or a file cannot be written
    pub fn process(&mut self) -> Result<()> {
        let mut config = self.cli.noise_config()?;
        let mut palette = self.cli.palette()?;
        let options = self.cli.preview_options();

        let mut rng = rand::rng();
        if self.cli.randomize {
            config = randomize_settings(&mut rng, &config);
        } else if self.cli.random_seed {
            config.seed = random_seed(&mut rng);
        }
        if self.cli.random_palette {
            palette = random_palette(&mut rng);
        }

        if self.cli.count == 0 {
            return Ok(());
        }
        self.progress.initialize(self.cli.count as usize);

        let base_seed = config.seed;
        for offset in 0..self.cli.count {
            config.seed = base_seed.wrapping_add(offset);
            self.progress.start_render(config.seed);

            let rendered = self.renderer.render(&config, &palette, options)?;

            let output_path = self.output_path(config.seed);
            export_png(&rendered.image, &output_path)?;
            if self.cli.preview {
                export_png(&rendered.preview, &Self::preview_path(&output_path))?;
            }

            self.progress.complete_render(&output_path);
        }

        self.progress.finish();
        self.report(&config, &palette);

        Ok(())
    }

    // Allow print for user feedback on the settings actually used
    #[allow(clippy::print_stderr)]
    fn report(&self, config: &NoiseConfig, palette: &Palette) {
        if self.cli.quiet {
            return;
        }
        eprintln!(
            "grid {}x{}, scale {}, falloff {}, thresholds [{}, {}], {:?}, palette {}",
            config.grid_x,
            config.grid_y,
            config.scale,
            config.falloff_power,
            config.thresh_min,
            config.thresh_max,
            config.interpolation,
            palette.to_hex().join(",")
        );
    }

    /// Output file for `seed`; batches of more than one seed are suffixed with it
    pub fn output_path(&self, seed: u64) -> PathBuf {
        if self.cli.count <= 1 {
            return self.cli.output.clone();
        }

        let stem = self.cli.output.file_stem().unwrap_or_default();
        let name = format!("{}_{seed}.png", stem.to_string_lossy());

        if let Some(parent) = self.cli.output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }

    fn preview_path(output_path: &Path) -> PathBuf {
        let stem = output_path.file_stem().unwrap_or_default();
        let name = format!("{}{PREVIEW_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = output_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
