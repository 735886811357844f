//! Common types and utilities shared across CLI commands.

use clap::{Args, ValueEnum};
use foiltune::config::ConfigFile;
use foiltune::query::parse_query_with_base;
use foiltune::setup::{Discipline, Goal, SetupInput};

use crate::error::CliError;

/// Discipline selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum DisciplineArg {
    /// Prone surf foiling
    Prone,
    /// Wingfoiling
    Wing,
    /// SUP foiling
    Sup,
    /// Downwind runs
    Downwind,
    /// Tow-in or surf assist
    Tow,
    /// Electric foil board
    Efoil,
}

impl From<DisciplineArg> for Discipline {
    fn from(arg: DisciplineArg) -> Self {
        match arg {
            DisciplineArg::Prone => Discipline::Prone,
            DisciplineArg::Wing => Discipline::Wing,
            DisciplineArg::Sup => Discipline::Sup,
            DisciplineArg::Downwind => Discipline::Downwind,
            DisciplineArg::Tow => Discipline::Tow,
            DisciplineArg::Efoil => Discipline::Efoil,
        }
    }
}

/// Tuning goal selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
#[value(rename_all = "snake_case")]
pub enum GoalArg {
    /// Need more lift / easier takeoff
    MoreLift,
    /// Too much lift / breaching
    LessLift,
    /// Want more top speed
    MoreSpeed,
    /// Want better pumping/linking
    BetterPump,
    /// Want tighter carves
    BetterTurn,
    /// Want stability at speed
    MoreStable,
}

impl From<GoalArg> for Goal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::MoreLift => Goal::MoreLift,
            GoalArg::LessLift => Goal::LessLift,
            GoalArg::MoreSpeed => Goal::MoreSpeed,
            GoalArg::BetterPump => Goal::BetterPump,
            GoalArg::BetterTurn => Goal::BetterTurn,
            GoalArg::MoreStable => Goal::MoreStable,
        }
    }
}

/// Rider and gear arguments shared by `calc` and `query`.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupArgs {
    /// Start from a shared setup query string (e.g. "riderKg=80&discipline=wing")
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Rider weight in kg
    #[arg(long, value_name = "KG")]
    pub rider_kg: Option<f64>,

    /// Riding discipline
    #[arg(long, value_enum)]
    pub discipline: Option<DisciplineArg>,

    /// Front wing area in cm²
    #[arg(long, value_name = "CM2")]
    pub front_area: Option<f64>,

    /// Front wing aspect ratio
    #[arg(long, value_name = "AR")]
    pub front_ar: Option<f64>,

    /// Stabilizer area in cm²
    #[arg(long, value_name = "CM2")]
    pub stab_area: Option<f64>,

    /// Mast length in cm
    #[arg(long, value_name = "CM")]
    pub mast: Option<f64>,

    /// Fuselage length in cm
    #[arg(long, value_name = "CM")]
    pub fuse: Option<f64>,

    /// Board volume in liters
    #[arg(long, value_name = "L")]
    pub board_liters: Option<f64>,

    /// Water conditions (free text)
    #[arg(long)]
    pub condition: Option<String>,

    /// What you want to change
    #[arg(long, value_enum)]
    pub goal: Option<GoalArg>,

    /// Where your mast sits now, in cm from the tail
    #[arg(long, value_name = "CM")]
    pub current_track: Option<f64>,
}

/// Resolve the calculator input.
///
/// Precedence: CLI flags, then the query string, then the configured
/// profile (which itself falls back to built-in defaults).
pub fn resolve_input(args: &SetupArgs, config: &ConfigFile) -> Result<SetupInput, CliError> {
    let base = config.base_input();
    let mut input = match args.query.as_deref() {
        Some(query) => parse_query_with_base(query, &base)?,
        None => base,
    };

    if let Some(rider_kg) = args.rider_kg {
        input.rider_kg = rider_kg;
    }
    if let Some(discipline) = args.discipline {
        input.discipline = discipline.into();
    }
    if let Some(area) = args.front_area {
        input.front_area_cm2 = area;
    }
    if let Some(ar) = args.front_ar {
        input.front_ar = ar;
    }
    if let Some(area) = args.stab_area {
        input.stab_area_cm2 = area;
    }
    if let Some(mast) = args.mast {
        input.mast_cm = mast;
    }
    if let Some(fuse) = args.fuse {
        input.fuse_cm = fuse;
    }
    if let Some(liters) = args.board_liters {
        input.board_liters = liters;
    }
    if let Some(condition) = &args.condition {
        input.condition = condition.clone();
    }
    if let Some(goal) = args.goal {
        input.goal = goal.into();
    }
    if let Some(track) = args.current_track {
        input.track_from_tail_cm = Some(track);
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_uses_config_profile() {
        let mut config = ConfigFile::default();
        config.rider.weight_kg = 68.0;
        config.rider.discipline = Discipline::Wing;

        let input = resolve_input(&SetupArgs::default(), &config).unwrap();
        assert_eq!(input.rider_kg, 68.0);
        assert_eq!(input.discipline, Discipline::Wing);
        assert_eq!(input.track_from_tail_cm, None);
    }

    #[test]
    fn test_flags_override_query_override_config() {
        let mut config = ConfigFile::default();
        config.gear.mast_cm = 70.0;
        config.gear.fuse_cm = 60.0;

        let args = SetupArgs {
            query: Some("riderKg=90&mastCm=95&trackFromTailCm=37".to_string()),
            rider_kg: Some(85.0),
            goal: Some(GoalArg::MoreStable),
            ..SetupArgs::default()
        };
        let input = resolve_input(&args, &config).unwrap();

        assert_eq!(input.rider_kg, 85.0);
        assert_eq!(input.mast_cm, 95.0);
        assert_eq!(input.fuse_cm, 60.0);
        assert_eq!(input.goal, Goal::MoreStable);
        assert_eq!(input.track_from_tail_cm, Some(37.0));
    }

    #[test]
    fn test_bad_query_is_an_error() {
        let args = SetupArgs {
            query: Some("goal=fly".to_string()),
            ..SetupArgs::default()
        };
        let err = resolve_input(&args, &ConfigFile::default()).unwrap_err();
        assert!(matches!(err, CliError::Query(_)));
    }

    #[test]
    fn test_value_enum_names_match_wire_names() {
        for arg in GoalArg::value_variants() {
            let name = arg.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(Goal::from(*arg).as_str(), name);
        }
        for arg in DisciplineArg::value_variants() {
            let name = arg.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(Discipline::from(*arg).as_str(), name);
        }
    }
}
