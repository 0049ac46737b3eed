//! Rendering constants and runtime configuration defaults

// Noise parameter defaults
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default zoom divisor applied to pixel coordinates
pub const DEFAULT_SCALE: u32 = 1;
/// Default lattice width and height
pub const DEFAULT_GRID_SIZE: usize = 5;
/// Default falloff exponent (identity)
pub const DEFAULT_FALLOFF_POWER: f64 = 1.0;
/// Default lower threshold bound
pub const DEFAULT_THRESH_MIN: f64 = 0.0;
/// Default upper threshold bound
pub const DEFAULT_THRESH_MAX: f64 = 1.0;
/// Default output width and height in pixels
pub const DEFAULT_IMAGE_SIZE: u32 = 16;

// Accepted ranges for interactive controls
/// Largest accepted scale
pub const MAX_SCALE: u32 = 16;
/// Smallest lattice dimension that still wraps between distinct cells
pub const MIN_GRID_SIZE: usize = 2;
/// Largest accepted lattice dimension
pub const MAX_GRID_SIZE: usize = 32;
/// Smallest falloff exponent offered by the controls
pub const MIN_FALLOFF_POWER: f64 = 0.2;
/// Largest falloff exponent offered by the controls
pub const MAX_FALLOFF_POWER: f64 = 3.0;
/// Smallest output dimension offered by the controls
pub const MIN_IMAGE_SIZE: u32 = 4;
/// Largest output dimension offered by the controls
pub const MAX_IMAGE_SIZE: u32 = 256;

// Randomization ranges
/// Upper bound (inclusive) for randomly drawn seeds
pub const MAX_RANDOM_SEED: u64 = 10_000;
/// Upper bound (inclusive) for randomly drawn lattice dimensions
pub const MAX_RANDOM_GRID_SIZE: usize = 10;
/// Upper bound for a randomly drawn lower threshold
pub const MAX_RANDOM_THRESH_MIN: f64 = 0.9;
/// Minimum gap between randomly drawn threshold bounds
pub const MIN_RANDOM_THRESH_GAP: f64 = 0.01;
/// Random falloff is drawn below this multiple of the upper threshold
pub const RANDOM_FALLOFF_SPAN: f64 = 3.0;
/// Fewest colors in a random palette
pub const MIN_RANDOM_PALETTE_LEN: usize = 2;
/// Most colors in a random palette
pub const MAX_RANDOM_PALETTE_LEN: usize = 8;

// Palette defaults
/// Initial palette, a five step ramp from white to black
pub const DEFAULT_PALETTE: [&str; 5] = ["#ffffff", "#bfbfbf", "#7f7f7f", "#3f3f3f", "#000000"];
/// Color appended by the "add" palette action
pub const NEW_COLOR: &str = "#ffffff";

// Preview settings
/// Nearest-neighbor magnification used for previews
pub const PREVIEW_UPSCALE: u32 = 16;
/// Copies per axis in the tiled preview
pub const TILE_REPEAT: u32 = 3;

// Output settings
/// File name used when no output path is given
pub const DEFAULT_OUTPUT: &str = "perlin_noise.png";
/// Suffix added to preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
