//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, and `config path`
//! for viewing and modifying the rider profile from the command line.

use std::path::Path;

use clap::Subcommand;
use foiltune::config::{ConfigFile, ConfigKey};
use tracing::warn;

use crate::error::CliError;
use crate::output::Output;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., rider.weight_kg)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., gear.mast_cm)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand against the file at `path`.
pub fn run(command: ConfigCommands, path: &Path, out: &dyn Output) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(&key, path, out),
        ConfigCommands::Set { key, value } => run_set(&key, &value, path, out),
        ConfigCommands::List => run_list(path, out),
        ConfigCommands::Path => {
            out.println(&path.display().to_string());
            Ok(())
        }
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'foiltune config list' to see available keys.",
            key
        ))
    })
}

/// Loads `path`, or the defaults when the file cannot be read.
fn load_or_default(path: &Path) -> ConfigFile {
    ConfigFile::load_from(path).unwrap_or_else(|e| {
        warn!(error = %e, "Using default configuration");
        ConfigFile::default()
    })
}

/// Get a configuration value.
fn run_get(key: &str, path: &Path, out: &dyn Output) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let config = load_or_default(path);
    let value = config_key.get(&config);

    if value.is_empty() {
        out.println("(not set)");
    } else {
        out.println(&value);
    }
    Ok(())
}

/// Set a configuration value.
fn run_set(key: &str, value: &str, path: &Path, out: &dyn Output) -> Result<(), CliError> {
    let config_key = parse_key(key)?;

    let mut config = load_or_default(path);
    config_key.set(&mut config, value)?;
    config.save_to(path)?;

    out.println(&format!("Set {} = {}", config_key.name(), config_key.get(&config)));
    Ok(())
}

/// List all configuration settings.
fn run_list(path: &Path, out: &dyn Output) -> Result<(), CliError> {
    let config = load_or_default(path);

    out.header("Configuration Settings");
    out.newline();

    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();

        // Print section header when section changes
        if section != current_section {
            if !current_section.is_empty() {
                out.newline();
            }
            out.println(&format!("[{}]", section));
            current_section = section;
        }

        let value = key.get(&config);
        if value.is_empty() {
            out.indented(&format!("{} = (not set)", key.key_name()));
        } else {
            out.indented(&format!("{} = {}", key.key_name(), value));
        }
    }

    Ok(())
}
