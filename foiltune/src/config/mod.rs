//! User configuration
//!
//! Stores the rider's usual profile and gear, plus logging preferences, in
//! an INI file at `~/.foiltune/config.ini`:
//!
//! ```ini
//! [rider]
//! weight_kg = 75
//! discipline = prone
//! goal = better_pump
//! condition = Clean waist-to-chest
//!
//! [gear]
//! front_area_cm2 = 1200
//! front_ar = 7
//! stab_area_cm2 = 260
//! mast_cm = 82
//! fuse_cm = 68
//! board_liters = 40
//!
//! [logging]
//! level = warn
//! directory =
//! ```
//!
//! Missing files and missing keys fall back to defaults. The profile is the
//! starting point the CLI builds a [`SetupInput`](crate::setup::SetupInput)
//! from before applying a query string or flags.

mod file;
mod keys;

pub use file::{ConfigFile, GearConfig, LoggingConfig, RiderConfig};
pub use keys::ConfigKey;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Name of the per-user configuration directory inside `$HOME`.
pub const CONFIG_DIR_NAME: &str = ".foiltune";

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Errors that can occur while reading or writing the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Directory holding the configuration file.
///
/// Falls back to the current directory when no home directory is known.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Full path of the configuration file.
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}
