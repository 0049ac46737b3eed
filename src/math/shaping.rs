//! Falloff and threshold shaping of interpolated noise values

/// Raise a value to the falloff power and clamp into `[0, 1]`
pub fn apply_falloff(value: f64, power: f64) -> f64 {
    value.powf(power).clamp(0.0, 1.0)
}

/// Stretch `[min, max]` onto `[0, 1]`, clipping values outside the band
///
/// A collapsed or inverted band (`max <= min`) maps everything to 0.
pub fn threshold_remap(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Falloff followed by threshold remap
pub fn shape(value: f64, power: f64, min: f64, max: f64) -> f64 {
    threshold_remap(apply_falloff(value, power), min, max)
}
