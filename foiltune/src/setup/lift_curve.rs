//! Speed/lift curve generation.
//!
//! Samples the lift equation `L = ½ ρ v² CL A` at every whole mph between
//! [`LIFT_CURVE_MIN_MPH`] and [`LIFT_CURVE_MAX_MPH`] and expresses the
//! result as a percentage of the rider's weight. 100% is the speed at which
//! the foil carries the rider without help.

use super::constants::{
    GRAVITY, LIFT_CURVE_MAX_MPH, LIFT_CURVE_MIN_MPH, LIFT_CURVE_POINTS, MPS_TO_MPH,
    SEAWATER_DENSITY,
};
use super::types::LiftPoint;

/// Builds the lift curve for a wing of effective lift coefficient `cl_eff`
/// and area `area_m2` carrying `rider_kg`.
pub fn build_lift_curve(cl_eff: f64, area_m2: f64, rider_kg: f64) -> Vec<LiftPoint> {
    let weight_n = rider_kg * GRAVITY;

    let mut points = Vec::with_capacity(LIFT_CURVE_POINTS);
    for mph in LIFT_CURVE_MIN_MPH..=LIFT_CURVE_MAX_MPH {
        let v = f64::from(mph) / MPS_TO_MPH;
        let lift_n = 0.5 * SEAWATER_DENSITY * v * v * cl_eff * area_m2;
        let lift_pct = lift_n / weight_n * 100.0;
        // Float-to-int casts saturate; degenerate masses land on 0 or u32::MAX.
        points.push(LiftPoint {
            mph,
            lift: lift_pct.round() as u32,
        });
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_curve_has_twenty_points_in_order() {
        let curve = build_lift_curve(0.565, 0.12, 75.0);
        assert_eq!(curve.len(), 20);
        let speeds: Vec<u32> = curve.iter().map(|p| p.mph).collect();
        assert_eq!(speeds, (6..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_known_sample() {
        // 10 mph = 4.4704 m/s; L = 0.5 * 1025 * 19.985 * 0.5 * 0.1 = 512.1 N
        // rider 75 kg = 735.75 N -> 69.6% -> 70
        let curve = build_lift_curve(0.5, 0.1, 75.0);
        let at_10 = curve.iter().find(|p| p.mph == 10).unwrap();
        assert_eq!(at_10.lift, 70);
    }

    #[test]
    fn test_lift_scales_with_area() {
        let small = build_lift_curve(0.5, 0.08, 75.0);
        let large = build_lift_curve(0.5, 0.16, 75.0);
        for (s, l) in small.iter().zip(&large) {
            assert!(l.lift >= s.lift);
        }
    }

    #[test]
    fn test_zero_mass_saturates() {
        let curve = build_lift_curve(0.5, 0.1, 0.0);
        assert_eq!(curve.len(), LIFT_CURVE_POINTS);
        assert!(curve.iter().all(|p| p.lift == u32::MAX));
    }

    #[test]
    fn test_zero_area_is_zero_lift() {
        let curve = build_lift_curve(0.5, 0.0, 75.0);
        assert!(curve.iter().all(|p| p.lift == 0));
    }

    proptest! {
        #[test]
        fn prop_curve_non_decreasing(
            cl in 0.35f64..=0.75,
            area in 0.01f64..0.3,
            rider in 20.0f64..200.0
        ) {
            let curve = build_lift_curve(cl, area, rider);
            prop_assert_eq!(curve.len(), LIFT_CURVE_POINTS);
            for pair in curve.windows(2) {
                prop_assert!(pair[1].lift >= pair[0].lift);
                prop_assert_eq!(pair[1].mph, pair[0].mph + 1);
            }
        }
    }
}
