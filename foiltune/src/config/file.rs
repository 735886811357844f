//! INI-backed configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use ini::Ini;
use tracing::{debug, Level};

use super::keys::ConfigKey;
use super::{config_file_path, ConfigError};
use crate::setup::{defaults, Discipline, Goal, SetupInput};

/// Rider profile (`[rider]` section).
#[derive(Debug, Clone, PartialEq)]
pub struct RiderConfig {
    pub weight_kg: f64,
    pub discipline: Discipline,
    pub goal: Goal,
    pub condition: String,
}

impl Default for RiderConfig {
    fn default() -> Self {
        Self {
            weight_kg: defaults::RIDER_KG,
            discipline: Discipline::default(),
            goal: Goal::default(),
            condition: defaults::CONDITION.to_string(),
        }
    }
}

/// Usual equipment (`[gear]` section).
#[derive(Debug, Clone, PartialEq)]
pub struct GearConfig {
    pub front_area_cm2: f64,
    pub front_ar: f64,
    pub stab_area_cm2: f64,
    pub mast_cm: f64,
    pub fuse_cm: f64,
    pub board_liters: f64,
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            front_area_cm2: defaults::FRONT_AREA_CM2,
            front_ar: defaults::FRONT_AR,
            stab_area_cm2: defaults::STAB_AREA_CM2,
            mast_cm: defaults::MAST_CM,
            fuse_cm: defaults::FUSE_CM,
            board_liters: defaults::BOARD_LITERS,
        }
    }
}

/// Logging preferences (`[logging]` section).
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set.
    pub level: Level,
    /// Directory for `foiltune.log`. `None` logs to stderr only.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            directory: None,
        }
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub rider: RiderConfig,
    pub gear: GearConfig,
    pub logging: LoggingConfig,
}

impl ConfigFile {
    /// Loads the configuration from [`config_file_path`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults. Keys that are absent, or present
    /// with an empty value, keep their defaults (except
    /// `logging.directory`, where empty means unset anyway).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(config);
        }

        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(source) => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
            ini::Error::Parse(err) => ConfigError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        })?;

        for key in ConfigKey::all() {
            let value = ini
                .section(Some(key.section()))
                .and_then(|props| props.get(key.key_name()));
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                key.set(&mut config, value)?;
            }
        }

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Writes the configuration to [`config_file_path`].
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            ini.with_section(Some(key.section()))
                .set(key.key_name(), key.get(self));
        }

        ini.write_to_file(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Saved config file");
        Ok(())
    }

    /// The configured profile as a calculator input, with no current track
    /// position.
    pub fn base_input(&self) -> SetupInput {
        SetupInput {
            rider_kg: self.rider.weight_kg,
            discipline: self.rider.discipline,
            front_area_cm2: self.gear.front_area_cm2,
            front_ar: self.gear.front_ar,
            stab_area_cm2: self.gear.stab_area_cm2,
            mast_cm: self.gear.mast_cm,
            fuse_cm: self.gear.fuse_cm,
            board_liters: self.gear.board_liters,
            condition: self.rider.condition.clone(),
            goal: self.rider.goal,
            track_from_tail_cm: None,
        }
    }
}
