//! Presets command - list disciplines, goals and typical conditions.

use foiltune::presets::CONDITIONS;
use foiltune::setup::{Discipline, Goal};

use crate::output::Output;

/// Run the presets command.
pub fn run(out: &dyn Output) {
    out.header("Presets");
    out.newline();

    out.subheader("Disciplines (--discipline)");
    for discipline in Discipline::ALL {
        out.indented(&format!(
            "{:<10} {} (lift x{})",
            discipline.as_str(),
            discipline.label(),
            discipline.lift_bias()
        ));
    }
    out.newline();

    out.subheader("Goals (--goal)");
    for goal in Goal::ALL {
        out.indented(&format!(
            "{:<12} {} (track {:+} cm)",
            goal.as_str(),
            goal.label(),
            goal.track_offset_cm()
        ));
    }
    out.newline();

    out.subheader("Conditions (--condition)");
    for condition in CONDITIONS {
        out.indented(condition);
    }
}
