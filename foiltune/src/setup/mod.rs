//! Setup calculator module
//!
//! Derives mast track position, shim angle, pressure bias, performance
//! scores and a lift curve from rider and foil parameters.
//!
//! # Pipeline
//!
//! ```text
//! SetupInput
//!     │
//!     ├─► area / stab ratio / discipline bias
//!     ├─► effective CL ──► takeoff speed ──► shim
//!     ├─► track heuristic + goal offset ──► track delta
//!     ├─► liftiness ──► pressure bias
//!     ├─► pump / turn / speed scores
//!     └─► lift curve
//!           │
//!           ▼
//!      SetupOutput (+ notes)
//! ```

mod calc;
pub mod constants;
mod lift_curve;
mod types;

pub use calc::{calc_setup, effective_cl, takeoff_speed_mph};
pub use lift_curve::build_lift_curve;
pub use types::{
    defaults, Discipline, Goal, LiftPoint, ParseEnumError, PressureBias, SetupInput, SetupOutput,
};
