//! Typed access to individual configuration settings.
//!
//! Every setting is addressed as `section.key` (for example
//! `gear.front_area_cm2`). The same `get`/`set` pair drives the INI reader,
//! the writer and the CLI `config` command, so parsing rules live in one
//! place.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use super::file::ConfigFile;
use super::ConfigError;

/// A single configuration setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    RiderWeightKg,
    RiderDiscipline,
    RiderGoal,
    RiderCondition,
    GearFrontAreaCm2,
    GearFrontAr,
    GearStabAreaCm2,
    GearMastCm,
    GearFuseCm,
    GearBoardLiters,
    LoggingLevel,
    LoggingDirectory,
}

impl ConfigKey {
    /// All keys, grouped by section in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::RiderWeightKg,
            ConfigKey::RiderDiscipline,
            ConfigKey::RiderGoal,
            ConfigKey::RiderCondition,
            ConfigKey::GearFrontAreaCm2,
            ConfigKey::GearFrontAr,
            ConfigKey::GearStabAreaCm2,
            ConfigKey::GearMastCm,
            ConfigKey::GearFuseCm,
            ConfigKey::GearBoardLiters,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingDirectory,
        ]
    }

    /// Full `section.key` name.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::RiderWeightKg => "rider.weight_kg",
            ConfigKey::RiderDiscipline => "rider.discipline",
            ConfigKey::RiderGoal => "rider.goal",
            ConfigKey::RiderCondition => "rider.condition",
            ConfigKey::GearFrontAreaCm2 => "gear.front_area_cm2",
            ConfigKey::GearFrontAr => "gear.front_ar",
            ConfigKey::GearStabAreaCm2 => "gear.stab_area_cm2",
            ConfigKey::GearMastCm => "gear.mast_cm",
            ConfigKey::GearFuseCm => "gear.fuse_cm",
            ConfigKey::GearBoardLiters => "gear.board_liters",
            ConfigKey::LoggingLevel => "logging.level",
            ConfigKey::LoggingDirectory => "logging.directory",
        }
    }

    /// INI section name.
    pub fn section(&self) -> &'static str {
        self.split().0
    }

    /// Key name within its section.
    pub fn key_name(&self) -> &'static str {
        self.split().1
    }

    fn split(&self) -> (&'static str, &'static str) {
        let name = self.name();
        name.split_once('.').unwrap_or(("", name))
    }

    /// Current value rendered as it is written to the file. Unset optional
    /// values render as the empty string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::RiderWeightKg => config.rider.weight_kg.to_string(),
            ConfigKey::RiderDiscipline => config.rider.discipline.to_string(),
            ConfigKey::RiderGoal => config.rider.goal.to_string(),
            ConfigKey::RiderCondition => config.rider.condition.clone(),
            ConfigKey::GearFrontAreaCm2 => config.gear.front_area_cm2.to_string(),
            ConfigKey::GearFrontAr => config.gear.front_ar.to_string(),
            ConfigKey::GearStabAreaCm2 => config.gear.stab_area_cm2.to_string(),
            ConfigKey::GearMastCm => config.gear.mast_cm.to_string(),
            ConfigKey::GearFuseCm => config.gear.fuse_cm.to_string(),
            ConfigKey::GearBoardLiters => config.gear.board_liters.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.as_str().to_lowercase(),
            ConfigKey::LoggingDirectory => config
                .logging
                .directory
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }

    /// Parses `value` and stores it in `config`.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match self {
            ConfigKey::RiderWeightKg => config.rider.weight_kg = self.positive(value)?,
            ConfigKey::RiderDiscipline => {
                config.rider.discipline = value.parse().map_err(|e| self.invalid(value, e))?
            }
            ConfigKey::RiderGoal => {
                config.rider.goal = value.parse().map_err(|e| self.invalid(value, e))?
            }
            ConfigKey::RiderCondition => config.rider.condition = value.to_string(),
            ConfigKey::GearFrontAreaCm2 => config.gear.front_area_cm2 = self.positive(value)?,
            ConfigKey::GearFrontAr => config.gear.front_ar = self.positive(value)?,
            ConfigKey::GearStabAreaCm2 => config.gear.stab_area_cm2 = self.positive(value)?,
            ConfigKey::GearMastCm => config.gear.mast_cm = self.positive(value)?,
            ConfigKey::GearFuseCm => config.gear.fuse_cm = self.positive(value)?,
            ConfigKey::GearBoardLiters => config.gear.board_liters = self.positive(value)?,
            ConfigKey::LoggingLevel => {
                config.logging.level = value
                    .parse::<Level>()
                    .map_err(|e| self.invalid(value, e))?
            }
            ConfigKey::LoggingDirectory => {
                config.logging.directory = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
        }
        Ok(())
    }

    fn positive(&self, value: &str) -> Result<f64, ConfigError> {
        match value.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
            _ => Err(self.invalid(value, "must be a positive number")),
        }
    }

    fn invalid(&self, value: &str, reason: impl ToString) -> ConfigError {
        ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::all()
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::{Discipline, Goal};

    #[test]
    fn test_parse_all_keys() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "rider.height".parse::<ConfigKey>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey(ref k) if k == "rider.height"));
    }

    #[test]
    fn test_section_and_key_name() {
        assert_eq!(ConfigKey::GearFrontAr.section(), "gear");
        assert_eq!(ConfigKey::GearFrontAr.key_name(), "front_ar");
        assert_eq!(ConfigKey::LoggingLevel.section(), "logging");
    }

    #[test]
    fn test_set_and_get() {
        let mut config = ConfigFile::default();
        ConfigKey::RiderWeightKg.set(&mut config, "82.5").unwrap();
        ConfigKey::RiderDiscipline.set(&mut config, "wing").unwrap();
        ConfigKey::RiderGoal.set(&mut config, "more_speed").unwrap();
        ConfigKey::LoggingLevel.set(&mut config, "debug").unwrap();

        assert_eq!(config.rider.weight_kg, 82.5);
        assert_eq!(config.rider.discipline, Discipline::Wing);
        assert_eq!(config.rider.goal, Goal::MoreSpeed);
        assert_eq!(ConfigKey::RiderWeightKg.get(&config), "82.5");
        assert_eq!(ConfigKey::LoggingLevel.get(&config), "debug");
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = ConfigFile::default();
        assert!(ConfigKey::GearMastCm.set(&mut config, "-3").is_err());
        assert!(ConfigKey::GearMastCm.set(&mut config, "long").is_err());
        assert!(ConfigKey::RiderDiscipline.set(&mut config, "kite").is_err());
        assert!(ConfigKey::LoggingLevel.set(&mut config, "loud").is_err());
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_directory_empty_clears() {
        let mut config = ConfigFile::default();
        ConfigKey::LoggingDirectory
            .set(&mut config, "/tmp/foiltune-logs")
            .unwrap();
        assert_eq!(
            ConfigKey::LoggingDirectory.get(&config),
            "/tmp/foiltune-logs"
        );

        ConfigKey::LoggingDirectory.set(&mut config, "").unwrap();
        assert_eq!(config.logging.directory, None);
        assert_eq!(ConfigKey::LoggingDirectory.get(&config), "");
    }
}
