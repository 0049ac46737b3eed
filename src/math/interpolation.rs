//! Blending primitives for lattice interpolation
//!
//! Bilinear blending of four lattice corners, optionally eased with the
//! cubic smoothstep curve so that the result is C1 continuous across cells

use num_traits::Float;

/// Easing applied to the fractional lattice offsets before blending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum InterpolationMode {
    /// Raw linear blending between corners
    #[default]
    Linear,
    /// Offsets pass through `t * t * (3 - 2t)` before blending
    Smoothstep,
}

impl InterpolationMode {
    /// Remap a fractional offset in `[0, 1)` according to the mode
    pub fn ease<T: Float>(self, t: T) -> T {
        match self {
            Self::Linear => t,
            Self::Smoothstep => smoothstep(t),
        }
    }
}

/// Cubic Hermite easing `t * t * (3 - 2t)`
pub fn smoothstep<T: Float>(t: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    t * t * (three - two * t)
}

// Fused multiply-add would change the rounding of blended values
/// Linear blend from `a` at `t = 0` to `b` at `t = 1`
#[allow(clippy::suboptimal_flops)]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Blend four corners, horizontally by `dx` then vertically by `dy`
///
/// Corners are ordered top-left, top-right, bottom-left, bottom-right.
pub fn bilerp<T: Float>(corners: [T; 4], dx: T, dy: T) -> T {
    let [top_left, top_right, bottom_left, bottom_right] = corners;
    let top = lerp(top_left, top_right, dx);
    let bottom = lerp(bottom_left, bottom_right, dx);
    lerp(top, bottom, dy)
}
