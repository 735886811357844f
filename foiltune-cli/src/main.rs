//! foiltune CLI - Command-line interface
//!
//! Computes hydrofoil setup recommendations from rider and gear
//! measurements, and manages the rider profile in `~/.foiltune/config.ini`.

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use foiltune::config::{config_file_path, ConfigFile};
use foiltune::logging::init_logging;
use tracing::{debug, warn, Level};

use commands::common::SetupArgs;
use commands::config::ConfigCommands;
use error::CliError;
use output::ConsoleOutput;

#[derive(Parser)]
#[command(name = "foiltune")]
#[command(about = "Hydrofoil setup calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate mast track, shim and pressure recommendations
    Calc {
        #[command(flatten)]
        setup: SetupArgs,

        /// Print the input and result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the shareable query string for a setup
    Query {
        #[command(flatten)]
        setup: SetupArgs,
    },

    /// List disciplines, goals and typical conditions
    Presets,

    /// View or modify the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Create a default configuration file
    Init,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let path = config_file_path();

    // A broken config file must not stop `config set` from repairing it.
    let (mut config, load_error) = match ConfigFile::load_from(&path) {
        Ok(config) => (config, None),
        Err(e) => (ConfigFile::default(), Some(e)),
    };

    if cli.verbose {
        config.logging.level = Level::DEBUG;
    }
    let _logging_guard = init_logging(&config.logging)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Using default configuration");
    }
    debug!(path = %path.display(), "Loaded configuration");

    let out = ConsoleOutput::new();
    match cli.command {
        Commands::Calc { setup, json } => commands::calc::run(&setup, json, &config, &out),
        Commands::Query { setup } => commands::query::run(&setup, &config, &out),
        Commands::Presets => {
            commands::presets::run(&out);
            Ok(())
        }
        Commands::Config { command } => commands::config::run(command, &path, &out),
        Commands::Init => commands::init::run(&path, &out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc_flags() {
        let cli = Cli::try_parse_from([
            "foiltune",
            "calc",
            "--rider-kg",
            "82",
            "--discipline",
            "wing",
            "--goal",
            "more_speed",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Calc { setup, json } => {
                assert!(json);
                assert_eq!(setup.rider_kg, Some(82.0));
                assert_eq!(setup.discipline, Some(commands::common::DisciplineArg::Wing));
                assert_eq!(setup.goal, Some(commands::common::GoalArg::MoreSpeed));
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["foiltune", "presets", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_goal() {
        assert!(Cli::try_parse_from(["foiltune", "calc", "--goal", "fly"]).is_err());
    }
}
