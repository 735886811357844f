//! Physical constants and tuning heuristics used by the setup calculator.
//!
//! Centralises every fixed value the formulas depend on. The heuristic
//! ranges are rules of thumb, not measurements: each `*_RANGE` pair is the
//! span of the input over which a factor moves between its two extremes.

// ─────────────────────────────────────────────────────────────────────────────
// Physics
// ─────────────────────────────────────────────────────────────────────────────

/// Seawater density [kg/m³].
pub const SEAWATER_DENSITY: f64 = 1025.0;

/// Standard gravity [m/s²].
pub const GRAVITY: f64 = 9.81;

/// Meters per second to miles per hour.
pub const MPS_TO_MPH: f64 = 2.23694;

/// Square centimeters per square meter.
pub const CM2_PER_M2: f64 = 10_000.0;

/// Load margin on top of rider weight for board, foil and wetsuit.
pub const GEAR_WEIGHT_MARGIN: f64 = 1.05;

// ─────────────────────────────────────────────────────────────────────────────
// Lift coefficient
// ─────────────────────────────────────────────────────────────────────────────

/// Lift coefficient of a wing at the reference aspect ratio.
pub const CL_BASE: f64 = 0.55;

/// Aspect ratio at which the wing produces `CL_BASE`.
pub const CL_REFERENCE_AR: f64 = 6.5;

/// CL gained per unit of aspect ratio below the reference.
pub const CL_PER_AR: f64 = 0.03;

/// Effective CL bounds.
pub const CL_MIN: f64 = 0.35;
pub const CL_MAX: f64 = 0.75;

// ─────────────────────────────────────────────────────────────────────────────
// Track position
// ─────────────────────────────────────────────────────────────────────────────

/// Neutral mast position [cm from tail].
pub const TRACK_BASE_CM: f64 = 36.0;

/// Track position bounds [cm from tail].
pub const TRACK_MIN_CM: f64 = 28.0;
pub const TRACK_MAX_CM: f64 = 48.0;

/// Front wing area span for the track heuristic [cm²] and its factor.
pub const TRACK_AREA_RANGE: (f64, f64) = (600.0, 1800.0);
pub const TRACK_AREA_FACTOR: (f64, f64) = (-2.5, 3.5);

/// Fuselage span [cm]; this factor is subtracted from the track.
pub const TRACK_FUSE_RANGE: (f64, f64) = (55.0, 85.0);
pub const TRACK_FUSE_FACTOR: (f64, f64) = (-2.0, 2.0);

/// Stabilizer ratio span; this factor is subtracted from the track.
pub const TRACK_STAB_RANGE: (f64, f64) = (0.18, 0.35);
pub const TRACK_STAB_FACTOR: (f64, f64) = (-1.5, 1.5);

/// Mast length span [cm].
pub const TRACK_MAST_RANGE: (f64, f64) = (65.0, 95.0);
pub const TRACK_MAST_FACTOR: (f64, f64) = (-0.7, 0.7);

// ─────────────────────────────────────────────────────────────────────────────
// Shim
// ─────────────────────────────────────────────────────────────────────────────

/// Shim angle bounds [deg].
pub const SHIM_MIN_DEG: f64 = -1.5;
pub const SHIM_MAX_DEG: f64 = 2.0;

/// Takeoff speed above which the wing needs help getting up [mph].
pub const SHIM_SLOW_TAKEOFF_MPH: f64 = 12.5;
pub const SHIM_SLOW_TAKEOFF_DEG: f64 = 0.8;

/// Takeoff speed above which it needs a lot of help [mph].
pub const SHIM_VERY_SLOW_TAKEOFF_MPH: f64 = 14.5;
pub const SHIM_VERY_SLOW_TAKEOFF_DEG: f64 = 0.6;

/// Takeoff speed below which lift is already generous [mph].
pub const SHIM_EARLY_TAKEOFF_MPH: f64 = 9.5;
pub const SHIM_EARLY_TAKEOFF_DEG: f64 = -0.6;

/// Stabilizer ratio thresholds.
pub const SHIM_SMALL_STAB_RATIO: f64 = 0.22;
pub const SHIM_SMALL_STAB_DEG: f64 = 0.3;
pub const SHIM_LARGE_STAB_RATIO: f64 = 0.32;
pub const SHIM_LARGE_STAB_DEG: f64 = -0.2;

/// Fuselage length thresholds [cm].
pub const SHIM_SHORT_FUSE_CM: f64 = 62.0;
pub const SHIM_SHORT_FUSE_DEG: f64 = 0.2;
pub const SHIM_LONG_FUSE_CM: f64 = 75.0;
pub const SHIM_LONG_FUSE_DEG: f64 = -0.1;

/// Shim magnitude above which a change is recommended [deg].
pub const SHIM_NOTE_THRESHOLD_DEG: f64 = 0.4;

// ─────────────────────────────────────────────────────────────────────────────
// Pressure bias
// ─────────────────────────────────────────────────────────────────────────────

/// Liftiness (cm² per kg, discipline-weighted) above which the setup rides
/// front-foot heavy.
pub const LIFTINESS_FRONT_HEAVY: f64 = 18.0;

/// Liftiness below which the setup rides back-foot heavy.
pub const LIFTINESS_BACK_HEAVY: f64 = 12.0;

// ─────────────────────────────────────────────────────────────────────────────
// Scores
// ─────────────────────────────────────────────────────────────────────────────

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

pub const SCORE_AREA_RANGE: (f64, f64) = (700.0, 1700.0);
pub const SCORE_AR_RANGE: (f64, f64) = (4.0, 9.0);
pub const SCORE_STAB_RANGE: (f64, f64) = (0.18, 0.35);
pub const SCORE_FUSE_RANGE: (f64, f64) = (55.0, 85.0);
pub const SCORE_MAST_RANGE: (f64, f64) = (65.0, 95.0);

pub const PUMP_BASE: f64 = 60.0;
pub const PUMP_AREA: (f64, f64) = (-5.0, 18.0);
pub const PUMP_AR: (f64, f64) = (-2.0, 18.0);
pub const PUMP_STAB: (f64, f64) = (8.0, -6.0);
pub const PUMP_FUSE: (f64, f64) = (6.0, -3.0);

pub const TURN_BASE: f64 = 60.0;
pub const TURN_AR: (f64, f64) = (18.0, -8.0);
pub const TURN_FUSE: (f64, f64) = (10.0, -8.0);
pub const TURN_MAST: (f64, f64) = (6.0, -4.0);
pub const TURN_AREA: (f64, f64) = (6.0, -6.0);

pub const SPEED_BASE: f64 = 55.0;
pub const SPEED_AR: (f64, f64) = (-4.0, 18.0);
pub const SPEED_FUSE: (f64, f64) = (-6.0, 12.0);
pub const SPEED_STAB: (f64, f64) = (-4.0, 8.0);

/// Score thresholds for the optional callout notes.
pub const PUMP_NOTE_THRESHOLD: f64 = 85.0;
pub const SPEED_NOTE_THRESHOLD: f64 = 80.0;
pub const TURN_NOTE_THRESHOLD: f64 = 80.0;

// ─────────────────────────────────────────────────────────────────────────────
// Lift curve
// ─────────────────────────────────────────────────────────────────────────────

/// First and last sampled speed [mph], inclusive.
pub const LIFT_CURVE_MIN_MPH: u32 = 6;
pub const LIFT_CURVE_MAX_MPH: u32 = 25;

/// Number of samples in the curve.
pub const LIFT_CURVE_POINTS: usize = (LIFT_CURVE_MAX_MPH - LIFT_CURVE_MIN_MPH + 1) as usize;
