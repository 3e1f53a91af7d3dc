//! Scalar helpers shared by the tick-driven models.
//!
//! Every model clamps its state at the mutation site. These helpers keep the
//! clamping and interpolation rules identical across modules.

/// Treats negative or non-finite frame deltas as zero.
///
/// # Examples
/// ```
/// use haunt::numeric::sanitize_delta;
/// assert_eq!(sanitize_delta(0.5), 0.5);
/// assert_eq!(sanitize_delta(-1.0), 0.0);
/// assert_eq!(sanitize_delta(f32::NAN), 0.0);
/// ```
#[must_use]
pub fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    }
}

/// Clamps `value` into `[0, 1]`, mapping NaN to zero.
#[must_use]
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Linear interpolation with `t` clamped into `[0, 1]`.
///
/// # Examples
/// ```
/// use haunt::numeric::lerp;
/// assert!((lerp(0.3, 2.0, 0.5) - 1.15).abs() < 1e-6);
/// assert!((lerp(0.3, 2.0, 4.0) - 2.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    let weight = clamp01(t);
    (to - from).mul_add(weight, from)
}

/// Returns where `value` sits between `from` and `to`, clamped into `[0, 1]`.
///
/// A degenerate range yields zero.
#[must_use]
pub fn inverse_lerp(from: f32, to: f32, value: f32) -> f32 {
    let span = to - from;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    clamp01((value - from) / span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::positive(0.016, 0.016)]
    #[case::zero(0.0, 0.0)]
    #[case::negative(-0.5, 0.0)]
    #[case::infinite(f32::INFINITY, 0.0)]
    fn delta_is_sanitised(#[case] input: f32, #[case] expected: f32) {
        assert_relative_eq!(sanitize_delta(input), expected);
    }

    #[rstest]
    #[case(-1.0, 0.0)]
    #[case(0.25, 0.25)]
    #[case(3.0, 1.0)]
    #[case(f32::NAN, 0.0)]
    fn clamp01_bounds(#[case] input: f32, #[case] expected: f32) {
        assert_relative_eq!(clamp01(input), expected);
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert_relative_eq!(lerp(0.8, 0.1, 0.0), 0.8);
        assert_relative_eq!(lerp(0.8, 0.1, 1.0), 0.1);
        assert_relative_eq!(lerp(0.8, 0.1, -2.0), 0.8);
    }

    #[test]
    fn inverse_lerp_handles_degenerate_range() {
        assert_relative_eq!(inverse_lerp(1.0, 1.0, 5.0), 0.0);
        assert_relative_eq!(inverse_lerp(0.1, 2.0, 1.05), 0.5);
    }
}
