//! Tests for corner blending and smoothstep easing

#[cfg(test)]
mod tests {
    use tilenoise::math::interpolation::{InterpolationMode, bilerp, lerp, smoothstep};

    // Tests smoothstep fixes the endpoints and midpoint
    // Verified by dropping the cubic term
    #[test]
    fn test_smoothstep_fixed_points() {
        assert!(smoothstep(0.0_f64).abs() < f64::EPSILON);
        assert!((smoothstep(1.0_f64) - 1.0).abs() < f64::EPSILON);
        assert!((smoothstep(0.5_f64) - 0.5).abs() < f64::EPSILON);
    }

    // Tests smoothstep eases in below the midpoint and out above it
    #[test]
    fn test_smoothstep_eases_toward_endpoints() {
        assert!(smoothstep(0.25_f64) < 0.25);
        assert!(smoothstep(0.75_f64) > 0.75);
        assert!((smoothstep(0.25_f32) - 0.156_25).abs() < 1e-6);
    }

    #[test]
    fn test_linear_mode_is_identity() {
        for t in [0.0_f64, 0.1, 0.25, 0.5, 0.9] {
            assert!((InterpolationMode::Linear.ease(t) - t).abs() < f64::EPSILON);
        }
        assert_eq!(InterpolationMode::default(), InterpolationMode::Linear);
    }

    #[test]
    fn test_smoothstep_mode_matches_function() {
        let t = 0.3_f64;
        assert!((InterpolationMode::Smoothstep.ease(t) - smoothstep(t)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert!((lerp(2.0_f64, 6.0, 0.0) - 2.0).abs() < f64::EPSILON);
        assert!((lerp(2.0_f64, 6.0, 1.0) - 6.0).abs() < f64::EPSILON);
        assert!((lerp(2.0_f64, 6.0, 0.25) - 3.0).abs() < f64::EPSILON);
    }

    // Tests corners are ordered top-left, top-right, bottom-left, bottom-right
    // Verified by swapping the horizontal and vertical blend order
    #[test]
    fn test_bilerp_corner_order() {
        let corners = [1.0_f64, 2.0, 3.0, 4.0];
        assert!((bilerp(corners, 0.0, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!((bilerp(corners, 1.0, 0.0) - 2.0).abs() < f64::EPSILON);
        assert!((bilerp(corners, 0.0, 1.0) - 3.0).abs() < f64::EPSILON);
        assert!((bilerp(corners, 1.0, 1.0) - 4.0).abs() < f64::EPSILON);
        assert!((bilerp(corners, 0.5, 0.5) - 2.5).abs() < f64::EPSILON);
    }
}
