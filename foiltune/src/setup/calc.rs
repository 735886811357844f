//! The setup calculator.
//!
//! [`calc_setup`] derives every recommendation from the input in a single
//! pass. Nothing is cached between calls, so it can be re-run on every
//! keystroke of a form or from several threads at once.

use tracing::debug;

use super::constants::*;
use super::lift_curve::build_lift_curve;
use super::types::{PressureBias, SetupInput, SetupOutput};
use crate::numeric::{clamp, map_range};

const SHIM_ADD_NOTE: &str = "Add tail shim for easier lift / less front foot";
const SHIM_REDUCE_NOTE: &str = "Reduce tail shim to calm lift / avoid breaching";
const SHIM_NEUTRAL_NOTE: &str = "Neutral shim looks good";

const PRESSURE_FRONT_NOTE: &str = "Wing is lift-strong for your weight. Expect front pressure; move mast back or reduce shim if needed.";
const PRESSURE_BACK_NOTE: &str = "Setup is on the smaller side. Expect back foot pressure; move mast forward or add shim to help.";
const PRESSURE_NEUTRAL_NOTE: &str = "Balanced setup expected.";

const PUMP_NOTE: &str = "This setup should pump/link very well.";
const SPEED_NOTE: &str = "Expect strong stability at higher speeds.";
const TURN_NOTE: &str = "Caveat: may feel looser in pitch during hard carves if over-shimmed.";

/// Applies `map_range` with a `(min, max)` pair for each side.
#[inline]
fn factor(x: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    map_range(x, input.0, input.1, output.0, output.1)
}

/// Computes setup recommendations for `input`.
///
/// Total over all numeric inputs: values far outside typical gear sizes are
/// absorbed by the saturating factors and final clamps rather than rejected.
pub fn calc_setup(input: &SetupInput) -> SetupOutput {
    let area_m2 = input.front_area_cm2 / CM2_PER_M2;
    let stab_ratio = input.stab_area_cm2 / input.front_area_cm2;
    let lift_bias = input.discipline.lift_bias();

    let cl_eff = effective_cl(input.front_ar, lift_bias);
    let takeoff_mph = takeoff_speed_mph(input.rider_kg, cl_eff, area_m2);

    let track_from_tail_cm = recommended_track_cm(input, stab_ratio);
    let track_delta = input
        .track_from_tail_cm
        .map(|current| track_from_tail_cm - current);

    let shim_deg = recommended_shim_deg(takeoff_mph, stab_ratio, input.fuse_cm);
    let shim_note = shim_note(shim_deg);

    let liftiness = input.front_area_cm2 / input.rider_kg * lift_bias;
    let (pressure_bias, pressure_note) = pressure_bias(liftiness);

    let scores = Scores::compute(input, stab_ratio);

    debug!(
        stab_ratio,
        cl_eff,
        takeoff_mph,
        track_from_tail_cm,
        shim_deg,
        liftiness,
        "Computed foil setup"
    );

    let mut notes = Vec::new();
    if let Some(delta) = track_delta {
        let direction = if delta > 0.0 { "forward" } else { "back" };
        notes.push(format!(
            "Move mast {} by ~{:.1} cm from your current position.",
            direction,
            delta.abs()
        ));
    }
    notes.push(format!("Estimated takeoff speed: ~{:.1} mph.", takeoff_mph));
    if scores.pump >= PUMP_NOTE_THRESHOLD {
        notes.push(PUMP_NOTE.to_string());
    }
    if scores.speed >= SPEED_NOTE_THRESHOLD {
        notes.push(SPEED_NOTE.to_string());
    }
    if scores.turn >= TURN_NOTE_THRESHOLD {
        notes.push(TURN_NOTE.to_string());
    }

    SetupOutput {
        track_from_tail_cm,
        shim_deg,
        shim_note: shim_note.to_string(),
        pressure_bias,
        pressure_note: pressure_note.to_string(),
        pump_score: round_score(scores.pump),
        turn_score: round_score(scores.turn),
        speed_score: round_score(scores.speed),
        takeoff_mph,
        lift_curve: build_lift_curve(cl_eff, area_m2, input.rider_kg),
        notes,
    }
}

/// Lift coefficient estimate: lower aspect ratio wings make more lift per
/// unit area, scaled by how much lift the discipline actually uses.
pub fn effective_cl(front_ar: f64, lift_bias: f64) -> f64 {
    let cl_base = CL_BASE + (CL_REFERENCE_AR - front_ar) * CL_PER_AR;
    clamp(cl_base * lift_bias, CL_MIN, CL_MAX)
}

/// Speed at which lift equals rider weight plus gear margin [mph].
pub fn takeoff_speed_mph(rider_kg: f64, cl_eff: f64, area_m2: f64) -> f64 {
    let load_n = rider_kg * GRAVITY * GEAR_WEIGHT_MARGIN;
    let v = (2.0 * load_n / (SEAWATER_DENSITY * cl_eff * area_m2)).sqrt();
    v * MPS_TO_MPH
}

fn recommended_track_cm(input: &SetupInput, stab_ratio: f64) -> f64 {
    let wing_size = factor(input.front_area_cm2, TRACK_AREA_RANGE, TRACK_AREA_FACTOR);
    let fuse = factor(input.fuse_cm, TRACK_FUSE_RANGE, TRACK_FUSE_FACTOR);
    let stab = factor(stab_ratio, TRACK_STAB_RANGE, TRACK_STAB_FACTOR);
    let mast = factor(input.mast_cm, TRACK_MAST_RANGE, TRACK_MAST_FACTOR);

    // Longer fuselages and bigger stabilizers already add pitch stability,
    // so they pull the mast back.
    let track = TRACK_BASE_CM + wing_size - fuse - stab + mast + input.goal.track_offset_cm();
    clamp(track, TRACK_MIN_CM, TRACK_MAX_CM)
}

fn recommended_shim_deg(takeoff_mph: f64, stab_ratio: f64, fuse_cm: f64) -> f64 {
    let mut shim = 0.0;

    if takeoff_mph > SHIM_SLOW_TAKEOFF_MPH {
        shim += SHIM_SLOW_TAKEOFF_DEG;
    }
    if takeoff_mph > SHIM_VERY_SLOW_TAKEOFF_MPH {
        shim += SHIM_VERY_SLOW_TAKEOFF_DEG;
    }
    if takeoff_mph < SHIM_EARLY_TAKEOFF_MPH {
        shim += SHIM_EARLY_TAKEOFF_DEG;
    }

    if stab_ratio < SHIM_SMALL_STAB_RATIO {
        shim += SHIM_SMALL_STAB_DEG;
    }
    if stab_ratio > SHIM_LARGE_STAB_RATIO {
        shim += SHIM_LARGE_STAB_DEG;
    }

    if fuse_cm < SHIM_SHORT_FUSE_CM {
        shim += SHIM_SHORT_FUSE_DEG;
    }
    if fuse_cm > SHIM_LONG_FUSE_CM {
        shim += SHIM_LONG_FUSE_DEG;
    }

    clamp(shim, SHIM_MIN_DEG, SHIM_MAX_DEG)
}

fn shim_note(shim_deg: f64) -> &'static str {
    if shim_deg > SHIM_NOTE_THRESHOLD_DEG {
        SHIM_ADD_NOTE
    } else if shim_deg < -SHIM_NOTE_THRESHOLD_DEG {
        SHIM_REDUCE_NOTE
    } else {
        SHIM_NEUTRAL_NOTE
    }
}

fn pressure_bias(liftiness: f64) -> (PressureBias, &'static str) {
    if liftiness > LIFTINESS_FRONT_HEAVY {
        (PressureBias::FrontFootHeavy, PRESSURE_FRONT_NOTE)
    } else if liftiness < LIFTINESS_BACK_HEAVY {
        (PressureBias::BackFootHeavy, PRESSURE_BACK_NOTE)
    } else {
        (PressureBias::Neutral, PRESSURE_NEUTRAL_NOTE)
    }
}

/// Clamped, unrounded scores. Note thresholds compare these values; only the
/// output is rounded.
struct Scores {
    pump: f64,
    turn: f64,
    speed: f64,
}

impl Scores {
    fn compute(input: &SetupInput, stab_ratio: f64) -> Self {
        let area = input.front_area_cm2;
        let ar = input.front_ar;
        let fuse = input.fuse_cm;
        let mast = input.mast_cm;

        let pump = PUMP_BASE
            + factor(area, SCORE_AREA_RANGE, PUMP_AREA)
            + factor(ar, SCORE_AR_RANGE, PUMP_AR)
            + factor(stab_ratio, SCORE_STAB_RANGE, PUMP_STAB)
            + factor(fuse, SCORE_FUSE_RANGE, PUMP_FUSE);

        let turn = TURN_BASE
            + factor(ar, SCORE_AR_RANGE, TURN_AR)
            + factor(fuse, SCORE_FUSE_RANGE, TURN_FUSE)
            + factor(mast, SCORE_MAST_RANGE, TURN_MAST)
            + factor(area, SCORE_AREA_RANGE, TURN_AREA);

        let speed = SPEED_BASE
            + factor(ar, SCORE_AR_RANGE, SPEED_AR)
            + factor(fuse, SCORE_FUSE_RANGE, SPEED_FUSE)
            + factor(stab_ratio, SCORE_STAB_RANGE, SPEED_STAB);

        Self {
            pump: clamp(pump, SCORE_MIN, SCORE_MAX),
            turn: clamp(turn, SCORE_MIN, SCORE_MAX),
            speed: clamp(speed, SCORE_MIN, SCORE_MAX),
        }
    }
}

#[inline]
fn round_score(score: f64) -> u8 {
    score.round() as u8
}
