//! Input and output records for the setup calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// Error returned when a string names no known discipline or goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    /// What was being parsed ("discipline" or "goal").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated list of accepted values.
    pub expected: String,
}

/// Riding discipline. Each one rides the same wing with a different amount
/// of usable lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    #[default]
    Prone,
    Wing,
    Sup,
    Downwind,
    Tow,
    Efoil,
}

impl Discipline {
    /// Every discipline, in display order.
    pub const ALL: [Discipline; 6] = [
        Discipline::Prone,
        Discipline::Wing,
        Discipline::Sup,
        Discipline::Downwind,
        Discipline::Tow,
        Discipline::Efoil,
    ];

    /// Wire name used in query strings, JSON and the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Prone => "prone",
            Discipline::Wing => "wing",
            Discipline::Sup => "sup",
            Discipline::Downwind => "downwind",
            Discipline::Tow => "tow",
            Discipline::Efoil => "efoil",
        }
    }

    /// Multiplier applied to the wing's lift coefficient.
    pub fn lift_bias(&self) -> f64 {
        match self {
            Discipline::Prone => 1.0,
            Discipline::Wing => 0.9,
            Discipline::Sup => 1.05,
            Discipline::Downwind => 0.85,
            Discipline::Tow => 0.8,
            Discipline::Efoil => 0.7,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Discipline::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "discipline",
                value: s.to_string(),
                expected: join_names(Discipline::ALL.iter().map(|d| d.as_str())),
            })
    }
}

/// What the rider wants to change about the current setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    MoreLift,
    LessLift,
    MoreSpeed,
    #[default]
    BetterPump,
    BetterTurn,
    MoreStable,
}

impl Goal {
    /// Every goal, in display order.
    pub const ALL: [Goal; 6] = [
        Goal::MoreLift,
        Goal::LessLift,
        Goal::MoreSpeed,
        Goal::BetterPump,
        Goal::BetterTurn,
        Goal::MoreStable,
    ];

    /// Wire name used in query strings, JSON and the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::MoreLift => "more_lift",
            Goal::LessLift => "less_lift",
            Goal::MoreSpeed => "more_speed",
            Goal::BetterPump => "better_pump",
            Goal::BetterTurn => "better_turn",
            Goal::MoreStable => "more_stable",
        }
    }

    /// Shift applied to the recommended track position [cm].
    ///
    /// Positive moves the mast forward (away from the tail).
    pub fn track_offset_cm(&self) -> f64 {
        match self {
            Goal::MoreLift => 1.5,
            Goal::LessLift => -1.5,
            Goal::MoreSpeed => -1.0,
            Goal::BetterPump => 0.7,
            Goal::BetterTurn => 0.5,
            Goal::MoreStable => -0.5,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "goal",
                value: s.to_string(),
                expected: join_names(Goal::ALL.iter().map(|g| g.as_str())),
            })
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// Which foot the rider should expect to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureBias {
    #[serde(rename = "Front foot heavy")]
    FrontFootHeavy,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Back foot heavy")]
    BackFootHeavy,
}

impl PressureBias {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PressureBias::FrontFootHeavy => "Front foot heavy",
            PressureBias::Neutral => "Neutral",
            PressureBias::BackFootHeavy => "Back foot heavy",
        }
    }
}

impl fmt::Display for PressureBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// Default rider and gear values, shared by [`SetupInput::default`], the
/// query parser and the config file.
pub mod defaults {
    pub const RIDER_KG: f64 = 75.0;
    pub const FRONT_AREA_CM2: f64 = 1200.0;
    pub const FRONT_AR: f64 = 7.0;
    pub const STAB_AREA_CM2: f64 = 260.0;
    pub const MAST_CM: f64 = 82.0;
    pub const FUSE_CM: f64 = 68.0;
    pub const BOARD_LITERS: f64 = 40.0;
    pub const CONDITION: &str = "Clean waist-to-chest";
}

/// Rider and equipment description fed to [`calc_setup`](super::calc_setup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupInput {
    /// Rider mass [kg].
    pub rider_kg: f64,
    pub discipline: Discipline,
    /// Front wing area [cm²].
    pub front_area_cm2: f64,
    /// Front wing aspect ratio.
    #[serde(rename = "frontAR")]
    pub front_ar: f64,
    /// Stabilizer area [cm²].
    pub stab_area_cm2: f64,
    /// Mast length [cm].
    pub mast_cm: f64,
    /// Fuselage length [cm].
    pub fuse_cm: f64,
    /// Board volume [l]. Carried through; no formula uses it yet.
    pub board_liters: f64,
    /// Free-form description of the water. Display only.
    pub condition: String,
    pub goal: Goal,
    /// Where the mast currently sits [cm from tail], if known.
    #[serde(default)]
    pub track_from_tail_cm: Option<f64>,
}

impl Default for SetupInput {
    fn default() -> Self {
        Self {
            rider_kg: defaults::RIDER_KG,
            discipline: Discipline::default(),
            front_area_cm2: defaults::FRONT_AREA_CM2,
            front_ar: defaults::FRONT_AR,
            stab_area_cm2: defaults::STAB_AREA_CM2,
            mast_cm: defaults::MAST_CM,
            fuse_cm: defaults::FUSE_CM,
            board_liters: defaults::BOARD_LITERS,
            condition: defaults::CONDITION.to_string(),
            goal: Goal::default(),
            track_from_tail_cm: None,
        }
    }
}

/// One sample of the lift curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiftPoint {
    /// Board speed [mph].
    pub mph: u32,
    /// Lift as a percentage of the rider's weight, rounded. Saturates at
    /// `u32::MAX` for a zero rider mass.
    pub lift: u32,
}

/// Recommendations derived from a [`SetupInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupOutput {
    /// Recommended mast position [cm from tail], within 28..=48.
    pub track_from_tail_cm: f64,
    /// Recommended tail shim [deg], within -1.5..=2.0.
    pub shim_deg: f64,
    pub shim_note: String,
    pub pressure_bias: PressureBias,
    pub pressure_note: String,
    pub pump_score: u8,
    pub turn_score: u8,
    pub speed_score: u8,
    /// Estimated takeoff speed [mph].
    pub takeoff_mph: f64,
    pub lift_curve: Vec<LiftPoint>,
    pub notes: Vec<String>,
}
