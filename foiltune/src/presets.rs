//! Display labels and typical conditions offered to riders when picking a
//! setup.

use crate::setup::{Discipline, Goal};

/// Typical water conditions. `SetupInput::condition` is free-form; these are
/// the suggestions a form would offer.
pub const CONDITIONS: [&str; 4] = [
    "Glassy / small swell",
    "Clean waist-to-chest",
    "Windy / bumps",
    "Strong current / heavy swell",
];

impl Discipline {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Prone => "Prone",
            Discipline::Wing => "Wingfoil",
            Discipline::Sup => "SUP Foil",
            Discipline::Downwind => "Downwind",
            Discipline::Tow => "Tow/Surf Assist",
            Discipline::Efoil => "E-foil",
        }
    }
}

impl Goal {
    /// Human-readable label, phrased as what the rider is experiencing or
    /// wants.
    pub fn label(&self) -> &'static str {
        match self {
            Goal::MoreLift => "Need more lift / easier takeoff",
            Goal::LessLift => "Too much lift / breaching",
            Goal::MoreSpeed => "Want more top speed",
            Goal::BetterPump => "Want better pumping/linking",
            Goal::BetterTurn => "Want tighter carves",
            Goal::MoreStable => "Want stability at speed",
        }
    }
}
