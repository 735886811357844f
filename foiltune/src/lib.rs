//! foiltune - Hydrofoil setup tuning
//!
//! This library turns a rider's weight, foil geometry and tuning goal into
//! concrete equipment recommendations: mast track position, tail shim angle,
//! expected foot-pressure bias, performance scores and a speed/lift curve.
//!
//! # Architecture
//!
//! ```text
//! query string ──► SetupInput ──► calc_setup() ──► SetupOutput ──► caller
//!                      ▲
//!   config.ini ────────┘ (rider profile)
//! ```
//!
//! The calculator is a pure function. Everything around it (query codec,
//! configuration file, logging) exists to feed it and present its results.
//!
//! # Example
//!
//! ```
//! use foiltune::setup::{calc_setup, SetupInput};
//!
//! let output = calc_setup(&SetupInput::default());
//! assert!((28.0..=48.0).contains(&output.track_from_tail_cm));
//! assert_eq!(output.lift_curve.len(), 20);
//! ```

pub mod config;
pub mod logging;
pub mod numeric;
pub mod presets;
pub mod query;
pub mod setup;

pub use setup::{calc_setup, SetupInput, SetupOutput};
