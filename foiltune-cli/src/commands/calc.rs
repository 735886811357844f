//! Calc command - compute and print setup recommendations.

use foiltune::config::ConfigFile;
use foiltune::setup::{calc_setup, SetupInput, SetupOutput};
use serde::Serialize;
use tracing::info;

use super::common::{resolve_input, SetupArgs};
use crate::error::CliError;
use crate::output::Output;

/// Width of the score and lift bars at 100%.
const BAR_WIDTH: usize = 20;

/// Lift percentage drawn as a full-width bar in the lift table.
const LIFT_BAR_FULL_PCT: u32 = 200;

/// JSON document printed by `calc --json`.
#[derive(Debug, Serialize)]
struct CalcReport<'a> {
    input: &'a SetupInput,
    output: &'a SetupOutput,
}

/// Run the calc command.
pub fn run(
    args: &SetupArgs,
    json: bool,
    config: &ConfigFile,
    out: &dyn Output,
) -> Result<(), CliError> {
    let input = resolve_input(args, config)?;
    let output = calc_setup(&input);
    info!(
        discipline = %input.discipline,
        goal = %input.goal,
        track = output.track_from_tail_cm,
        shim = output.shim_deg,
        "Calculated setup"
    );

    if json {
        let report = CalcReport {
            input: &input,
            output: &output,
        };
        out.println(&serde_json::to_string_pretty(&report)?);
    } else {
        print_report(out, &input, &output);
    }
    Ok(())
}

/// Print the human-readable report.
pub fn print_report(out: &dyn Output, input: &SetupInput, output: &SetupOutput) {
    out.header("Foil Setup");
    out.println(&format!(
        "{} kg, {}, {} cm² @ AR {} / {} cm² stab, {} cm mast, {} cm fuse",
        input.rider_kg,
        input.discipline.label(),
        input.front_area_cm2,
        input.front_ar,
        input.stab_area_cm2,
        input.mast_cm,
        input.fuse_cm
    ));
    out.println(&format!("Goal:      {}", input.goal.label()));
    out.println(&format!("Condition: {}", input.condition));
    out.newline();

    out.subheader("Recommendation");
    out.indented(&format!(
        "Track:    {:.1} cm from tail",
        output.track_from_tail_cm
    ));
    out.indented(&format!(
        "Shim:     {:+.1}° ({})",
        output.shim_deg, output.shim_note
    ));
    out.indented(&format!("Pressure: {}", output.pressure_bias));
    out.indented(&format!("          {}", output.pressure_note));
    out.indented(&format!("Takeoff:  ~{:.1} mph", output.takeoff_mph));
    out.newline();

    out.subheader("Scores");
    for (name, score) in [
        ("Pump ", output.pump_score),
        ("Turn ", output.turn_score),
        ("Speed", output.speed_score),
    ] {
        out.indented(&format!(
            "{} {:>3} {}",
            name,
            score,
            bar(u32::from(score), 100)
        ));
    }
    out.newline();

    out.subheader("Lift Curve");
    out.indented("mph  lift%");
    for point in &output.lift_curve {
        let marker = if point.lift >= 100 { '*' } else { ' ' };
        out.indented(&format!(
            "{:>3} {:>5}{} {}",
            point.mph,
            point.lift,
            marker,
            bar(point.lift, LIFT_BAR_FULL_PCT)
        ));
    }
    out.indented("(* = foil carries your full weight)");
    out.newline();

    out.subheader("Notes");
    for note in &output.notes {
        out.indented(&format!("- {}", note));
    }
}

/// Horizontal bar for `value` out of `full`, capped at full width.
fn bar(value: u32, full: u32) -> String {
    let filled = (value.min(full) as usize * BAR_WIDTH) / full as usize;
    "█".repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BufferOutput;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0, 100), "");
        assert_eq!(bar(50, 100).chars().count(), 10);
        assert_eq!(bar(100, 100).chars().count(), BAR_WIDTH);
        assert_eq!(bar(559, 200).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_text_report_sections() {
        let out = BufferOutput::new();
        run(&SetupArgs::default(), false, &ConfigFile::default(), &out).unwrap();

        let text = out.text();
        assert!(text.contains("Foil Setup"));
        assert!(text.contains("Track:    38.4 cm from tail"));
        assert!(text.contains("Shim:     +0.3° (Neutral shim looks good)"));
        assert!(text.contains("Pressure: Neutral"));
        assert!(text.contains("- Estimated takeoff speed: ~10.8 mph."));
        assert!(text.contains("Goal:      Want better pumping/linking"));
    }

    #[test]
    fn test_lift_table_has_twenty_rows() {
        let out = BufferOutput::new();
        run(&SetupArgs::default(), false, &ConfigFile::default(), &out).unwrap();

        let rows = out
            .lines()
            .iter()
            .skip_while(|l| l.trim() != "mph  lift%")
            .skip(1)
            .take_while(|l| !l.contains("full weight"))
            .count();
        assert_eq!(rows, 20);
    }

    #[test]
    fn test_json_report() {
        let out = BufferOutput::new();
        let args = SetupArgs {
            current_track: Some(35.0),
            ..SetupArgs::default()
        };
        run(&args, true, &ConfigFile::default(), &out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out.text()).unwrap();
        assert_eq!(value["input"]["trackFromTailCm"], 35.0);
        assert_eq!(value["input"]["discipline"], "prone");
        assert!(value["output"]["notes"][0]
            .as_str()
            .unwrap()
            .starts_with("Move mast forward"));
    }
}
