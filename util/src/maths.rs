//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Limit a value to the closed range `[min, max]`.
///
/// Unlike `f64::clamp` this does not panic when `min > max`, the upper bound
/// is applied first and the lower bound wins. NaN values are passed through.
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: Float
{
    let mut ret = value;

    if ret > max {
        ret = max
    }
    if ret < min {
        ret = min
    }

    ret
}

/// Return `value`, or `floor` if the value is below it.
///
/// Used to keep divisors away from zero.
pub fn floor_at<T>(value: T, floor: T) -> T
where
    T: Float
{
    if value < floor {
        floor
    }
    else {
        value
    }
}

/// Return `value` if it is finite, otherwise `fallback`.
///
/// Applied to demands before clamping, since `clamp` passes NaN through.
pub fn finite_or<T>(value: T, fallback: T) -> T
where
    T: Float
{
    if value.is_finite() {
        value
    }
    else {
        fallback
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5f64, 0.0, 1.0), 0.5);
        assert_eq!(clamp(1.5f64, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5f64, 0.0, 1.0), 0.0);
        assert_eq!(clamp(-2f32, -1.0, 1.0), -1.0);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_floor_at() {
        assert_eq!(floor_at(0.15f64, 1e-3), 0.15);
        assert_eq!(floor_at(0.0f64, 1e-3), 1e-3);
        assert_eq!(floor_at(-1.0f64, 1e-4), 1e-4);
    }

    #[test]
    fn test_finite_or() {
        assert_eq!(finite_or(0.3f64, 0.0), 0.3);
        assert_eq!(finite_or(-7.0f64, 0.0), -7.0);
        assert_eq!(finite_or(f64::NAN, 0.0), 0.0);
        assert_eq!(finite_or(f64::INFINITY, 0.5), 0.5);
        assert_eq!(finite_or(f32::NEG_INFINITY, -1.0), -1.0);
    }
}
