//! Numeric helpers shared by the setup formulas.
//!
//! Both functions are saturating: whatever goes in, the result stays inside
//! the requested bounds.

/// Bounds `x` to `[min, max]`.
///
/// Callers guarantee `min <= max`. Unlike [`f64::clamp`] this never panics,
/// which keeps the calculator total even for degenerate inputs.
#[inline]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(x))
}

/// Saturating linear interpolation of `x` from `[in_min, in_max]` onto
/// `[out_min, out_max]`.
///
/// The interpolation parameter is clamped to `[0, 1]` before it is applied,
/// so inputs outside the input range yield the matching output bound.
/// Reversed output ranges (`out_min > out_max`) work the same way.
///
/// # Preconditions
///
/// `in_min != in_max`. A zero-width input range divides by zero; every
/// caller in this crate uses fixed, distinct bounds.
#[inline]
pub fn map_range(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let t = clamp((x - in_min) / (in_max - in_min), 0.0, 1.0);
    out_min + t * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_inside_range_is_identity() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(36.0, 28.0, 48.0), 36.0);
    }

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(clamp(-3.0, -1.5, 2.0), -1.5);
        assert_eq!(clamp(99.0, 28.0, 48.0), 48.0);
    }

    #[test]
    fn test_map_range_midpoint() {
        assert!((map_range(1200.0, 600.0, 1800.0, -2.5, 3.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_map_range_reversed_output() {
        // turn score aspect-ratio term: 18 at AR 4, -8 at AR 9
        assert_eq!(map_range(4.0, 4.0, 9.0, 18.0, -8.0), 18.0);
        assert_eq!(map_range(9.0, 4.0, 9.0, 18.0, -8.0), -8.0);
        assert!((map_range(6.5, 4.0, 9.0, 18.0, -8.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_map_range_does_not_extrapolate() {
        assert_eq!(map_range(0.0, 600.0, 1800.0, -2.5, 3.5), -2.5);
        assert_eq!(map_range(10_000.0, 600.0, 1800.0, -2.5, 3.5), 3.5);
    }

    proptest! {
        #[test]
        fn prop_clamp_within_bounds(x in -1e9f64..1e9f64, a in -100.0f64..100.0, w in 0.0f64..100.0) {
            let r = clamp(x, a, a + w);
            prop_assert!(r >= a && r <= a + w);
        }

        #[test]
        fn prop_map_range_saturates_below(x in -1e6f64..=55.0) {
            prop_assert_eq!(map_range(x, 55.0, 85.0, 6.0, -3.0), 6.0);
        }

        #[test]
        fn prop_map_range_saturates_above(x in 85.0f64..1e6) {
            prop_assert_eq!(map_range(x, 55.0, 85.0, 6.0, -3.0), -3.0);
        }

        #[test]
        fn prop_map_range_monotonic_increasing(a in 0.0f64..2000.0, b in 0.0f64..2000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(map_range(lo, 700.0, 1700.0, -5.0, 18.0) <= map_range(hi, 700.0, 1700.0, -5.0, 18.0));
        }

        #[test]
        fn prop_map_range_monotonic_decreasing(a in 0.0f64..0.6, b in 0.0f64..0.6) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(map_range(lo, 0.18, 0.35, 8.0, -6.0) >= map_range(hi, 0.18, 0.35, 8.0, -6.0));
        }

        #[test]
        fn prop_map_range_stays_in_output_range(x in -1e9f64..1e9f64) {
            let r = map_range(x, 4.0, 9.0, 18.0, -8.0);
            prop_assert!((-8.0..=18.0).contains(&r));
        }
    }
}
