//! Game configuration loaded at startup.
//!
//! Every tunable has a default taken from [`crate::constants`]. A JSON file
//! may override any subset; missing fields keep their defaults. Validation
//! runs before the plugin installs anything so broken tunables surface as a
//! setup error rather than as misbehaving ghosts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ghost::{GhostConfig, RecoveryConfig};
use crate::interaction::InteractionConfig;
use crate::player::{PlayerConfig, StaminaConfig};
use crate::presentation::{EnergyBarConfig, FootstepConfig, TutorialConfig};
use crate::spawner::SpawnerConfig;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `lose_radius` is smaller than `detection_radius`.
    #[error("ghost lose radius {lose} is smaller than detection radius {detection}")]
    InvertedChaseHysteresis {
        /// Configured detection radius.
        detection: f32,
        /// Configured lose radius.
        lose: f32,
    },
    /// A tunable that must be positive is not.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Dotted path of the field.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A tunable that must be non-negative is negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Dotted path of the field.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// A `[min, max]` pair is inverted.
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Dotted path of the range.
        field: &'static str,
        /// Configured lower bound.
        min: f32,
        /// Configured upper bound.
        max: f32,
    },
    /// A fraction lies outside `[0, 1]`.
    #[error("{field} must lie within [0, 1], got {value}")]
    OutOfUnitRange {
        /// Dotted path of the field.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for [`GameConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

pub(crate) fn ensure_ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { field, min, max })
    }
}

pub(crate) fn ensure_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

/// Complete set of startup tunables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Template applied to every spawned ghost.
    pub ghost: GhostConfig,
    /// Stagger recovery tunables.
    pub recovery: RecoveryConfig,
    /// Player energy pool.
    pub stamina: StaminaConfig,
    /// Player movement and look.
    pub player: PlayerConfig,
    /// Pickup, contact and weapon reach.
    pub interaction: InteractionConfig,
    /// Monster spawning for the starting level.
    pub spawner: SpawnerConfig,
    /// Energy bar presentation.
    pub energy_bar: EnergyBarConfig,
    /// Footstep cadence.
    pub footsteps: FootstepConfig,
    /// Tutorial message sequencing.
    pub tutorial: TutorialConfig,
    /// Seed for the session RNG; entropy when absent.
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON for
    /// this structure. The parsed config is not validated.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Validates every section.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ghost.validate()?;
        self.recovery.validate()?;
        self.stamina.validate()?;
        self.player.validate()?;
        self.interaction.validate()?;
        self.spawner.validate()?;
        self.energy_bar.validate()?;
        self.footsteps.validate()?;
        self.tutorial.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        GameConfig::default()
            .validate()
            .expect("default config should validate");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(
            r#"{ "ghost": { "detection_radius": 4.0, "lose_radius": 6.0 }, "rng_seed": 3 }"#,
        )
        .expect("partial config parses");
        assert!((config.ghost.detection_radius - 4.0).abs() < f32::EPSILON);
        assert!((config.ghost.wander_radius - crate::WANDER_RADIUS).abs() < f32::EPSILON);
        assert_eq!(config.rng_seed, Some(3));
        assert_eq!(config.stamina, StaminaConfig::default());
    }

    #[rstest]
    #[case::inverted_radii(
        r#"{ "ghost": { "detection_radius": 20.0, "lose_radius": 5.0 } }"#
    )]
    #[case::zero_max_energy(r#"{ "stamina": { "max_energy": 0.0 } }"#)]
    fn invalid_sections_fail_validation(#[case] json: &str) {
        let config = GameConfig::from_json_str(json).expect("json parses");
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_json_str("{ ghost: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "rng_seed": 99 }}"#).expect("write config");
        let config = GameConfig::from_path(file.path()).expect("config loads");
        assert_eq!(config.rng_seed, Some(99));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            GameConfig::from_path(&missing),
            Err(ConfigError::Io { .. })
        ));
    }
}
