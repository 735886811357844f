//! Integration tests for the setup calculator.
//!
//! These tests drive the public API the way a caller does:
//! - query string → SetupInput → calc_setup → SetupOutput
//! - config profile → SetupInput → calc_setup
//! - JSON serialisation of the output
//!
//! Run with: `cargo test --test calculator_integration`

use foiltune::config::ConfigFile;
use foiltune::query::{input_to_query, parse_query_to_input, QueryError};
use foiltune::setup::{calc_setup, Discipline, Goal, PressureBias, SetupInput};

// ============================================================================
// Helper Functions
// ============================================================================

/// A wingfoil setup on a mid-aspect wing.
fn wing_setup() -> SetupInput {
    SetupInput {
        rider_kg: 82.0,
        discipline: Discipline::Wing,
        front_area_cm2: 1400.0,
        front_ar: 8.0,
        stab_area_cm2: 250.0,
        mast_cm: 85.0,
        fuse_cm: 72.0,
        board_liters: 95.0,
        condition: "Windy / bumps".to_string(),
        goal: Goal::MoreSpeed,
        track_from_tail_cm: Some(40.0),
    }
}

// ============================================================================
// Integration Tests
// ============================================================================

#[test]
fn test_shared_link_reproduces_recommendation() {
    let input = wing_setup();
    let direct = calc_setup(&input);

    let link = format!("?{}", input_to_query(&input));
    let from_link = calc_setup(&parse_query_to_input(&link).unwrap());

    assert_eq!(direct, from_link);
}

#[test]
fn test_default_link_matches_default_profile() {
    let from_query = calc_setup(&parse_query_to_input("").unwrap());
    let from_config = calc_setup(&ConfigFile::default().base_input());
    assert_eq!(from_query, from_config);
}

#[test]
fn test_wing_setup_recommendation() {
    let out = calc_setup(&wing_setup());

    // CL = (0.55 - 1.5 * 0.03) * 0.9 = 0.4545
    // takeoff ≈ 11.4 mph: no speed-based shim; stab ratio 0.179 -> +0.3
    assert!((out.takeoff_mph - 11.38).abs() < 0.01, "{}", out.takeoff_mph);
    assert!((out.shim_deg - 0.3).abs() < 1e-9);
    assert_eq!(out.pressure_bias, PressureBias::Neutral);
    assert_eq!(out.pump_score, 94);

    // 36 + 1.5 - 0.267 - (-1.5) + 0.233 - 1.0 ≈ 37.97, so the mast moves
    // back from 40.
    assert!((out.track_from_tail_cm - 37.967).abs() < 0.001);
    assert_eq!(
        out.notes[0],
        "Move mast back by ~2.0 cm from your current position."
    );
    assert_eq!(out.notes[1], "Estimated takeoff speed: ~11.4 mph.");
    assert_eq!(out.notes[2], "This setup should pump/link very well.");
    assert_eq!(out.lift_curve.len(), 20);
}

#[test]
fn test_output_json_shape() {
    let out = calc_setup(&SetupInput::default());
    let json = serde_json::to_value(&out).unwrap();

    assert!(json["trackFromTailCm"].is_number());
    assert!(json["shimDeg"].is_number());
    assert_eq!(json["pressureBias"], "Neutral");
    assert_eq!(json["liftCurve"].as_array().map(Vec::len), Some(20));
    assert_eq!(json["liftCurve"][0]["mph"], 6);
    assert!(json["notes"].is_array());
}

#[test]
fn test_boundary_rejects_unknown_discipline() {
    let err = parse_query_to_input("discipline=kitefoil").unwrap_err();
    assert!(matches!(err, QueryError::InvalidEnumValue { .. }));
    assert!(err.to_string().contains("kitefoil"));
}

#[test]
fn test_board_volume_does_not_change_output() {
    let small = calc_setup(&SetupInput {
        board_liters: 25.0,
        ..SetupInput::default()
    });
    let large = calc_setup(&SetupInput {
        board_liters: 140.0,
        ..SetupInput::default()
    });
    assert_eq!(small, large);
}
