//! Player energy pool gating the sprint.
//!
//! Energy drains at a constant rate while sprinting. When the player stops,
//! the recharge rate starts from zero and ramps linearly up to its ceiling,
//! so short pauses between sprints recover little energy.

use bevy::prelude::{Component, Resource};
use serde::{Deserialize, Serialize};

use crate::config::{ensure_non_negative, ensure_positive, ConfigError};
use crate::numeric::{clamp01, sanitize_delta};
use crate::{
    ENERGY_DRAIN_RATE, ENERGY_RECHARGE_ACCEL, MAX_ENERGY, MAX_ENERGY_RECHARGE_RATE,
    MIN_ENERGY_TO_SPRINT,
};

/// Tunables for the energy pool.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    /// Size of the pool.
    pub max_energy: f32,
    /// Energy spent per second of sprinting.
    pub drain_rate: f32,
    /// Ceiling of the recharge rate.
    pub max_recharge_rate: f32,
    /// Growth of the recharge rate per second spent recovering.
    pub ramp_accel: f32,
    /// Energy required to start a sprint.
    pub min_energy_to_sprint: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            max_energy: MAX_ENERGY,
            drain_rate: ENERGY_DRAIN_RATE,
            max_recharge_rate: MAX_ENERGY_RECHARGE_RATE,
            ramp_accel: ENERGY_RECHARGE_ACCEL,
            min_energy_to_sprint: MIN_ENERGY_TO_SPRINT,
        }
    }
}

impl StaminaConfig {
    /// Validates the tunables.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonPositive`] when the pool or a rate is not
    /// positive and [`ConfigError::InvertedRange`] when the sprint threshold
    /// exceeds the pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("stamina.max_energy", self.max_energy)?;
        ensure_positive("stamina.drain_rate", self.drain_rate)?;
        ensure_positive("stamina.max_recharge_rate", self.max_recharge_rate)?;
        ensure_positive("stamina.ramp_accel", self.ramp_accel)?;
        ensure_non_negative("stamina.min_energy_to_sprint", self.min_energy_to_sprint)?;
        if self.min_energy_to_sprint > self.max_energy {
            return Err(ConfigError::InvertedRange {
                field: "stamina.min_energy_to_sprint",
                min: self.min_energy_to_sprint,
                max: self.max_energy,
            });
        }
        Ok(())
    }
}

/// Energy state of one player.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct StaminaModel {
    config: StaminaConfig,
    current: f32,
    recharge_rate: f32,
    sprinting: bool,
}

impl Default for StaminaModel {
    fn default() -> Self {
        Self::new(StaminaConfig::default())
    }
}

impl StaminaModel {
    /// Creates a full pool that is not sprinting.
    #[must_use]
    pub const fn new(config: StaminaConfig) -> Self {
        Self {
            current: config.max_energy,
            config,
            recharge_rate: 0.0,
            sprinting: false,
        }
    }

    /// Advances the pool by `delta` seconds.
    ///
    /// `moving` is true when the movement input clears the deadzone. A sprint
    /// starts only with enough energy in hand and stops as soon as the button
    /// is released, the player halts or the pool runs dry.
    pub fn tick(&mut self, delta: f32, moving: bool, sprint_held: bool) {
        let delta = sanitize_delta(delta);
        let can_sprint = self.current >= self.config.min_energy_to_sprint;

        if !self.sprinting && sprint_held && moving && can_sprint {
            self.sprinting = true;
        }
        if self.sprinting && (!sprint_held || !moving || self.current <= 0.0) {
            self.sprinting = false;
        }

        if self.sprinting {
            self.current = (self.current - self.config.drain_rate * delta).max(0.0);
            self.recharge_rate = 0.0;
        } else if self.current < self.config.max_energy {
            self.current = self
                .config
                .max_energy
                .min(self.current + self.recharge_rate * delta);
            self.recharge_rate = self
                .config
                .max_recharge_rate
                .min(self.config.ramp_accel.mul_add(delta, self.recharge_rate));
        }
    }

    /// Fraction of the pool remaining, in `[0, 1]`.
    #[must_use]
    pub fn energy_fraction(&self) -> f32 {
        clamp01(self.current / self.config.max_energy)
    }

    /// Whether the player sprinted during the last tick.
    #[must_use]
    pub const fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Energy currently in the pool.
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Current recharge rate in energy per second.
    #[must_use]
    pub const fn recharge_rate(&self) -> f32 {
        self.recharge_rate
    }

    /// Tunables the pool was created with.
    #[must_use]
    pub const fn config(&self) -> &StaminaConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn model() -> StaminaModel {
        StaminaModel::default()
    }

    #[rstest]
    #[case::one_step(1)]
    #[case::four_steps(4)]
    #[case::sixty_steps(60)]
    fn sprint_drains_at_constant_rate(mut model: StaminaModel, #[case] steps: u16) {
        let delta = 1.0 / f32::from(steps);
        for _ in 0..steps {
            model.tick(delta, true, true);
        }
        assert!(model.is_sprinting());
        assert_relative_eq!(model.current(), 75.0, epsilon = 1e-3);
        assert_relative_eq!(model.recharge_rate(), 0.0);
    }

    #[rstest]
    fn energy_never_goes_negative(mut model: StaminaModel) {
        for _ in 0..5 {
            model.tick(1.0, true, true);
            assert!(model.current() >= 0.0);
        }
        assert_relative_eq!(model.current(), 0.0);
        assert!(!model.is_sprinting());
    }

    #[rstest]
    fn energy_never_exceeds_max(mut model: StaminaModel) {
        model.tick(1.0, true, true);
        for _ in 0..100 {
            model.tick(0.5, false, false);
            assert!(model.current() <= model.config().max_energy);
        }
        assert_relative_eq!(model.current(), model.config().max_energy);
    }

    #[rstest]
    fn cannot_start_below_threshold(mut model: StaminaModel) {
        model.tick(3.7, true, true);
        model.tick(0.0, false, false);
        assert!(model.current() < model.config().min_energy_to_sprint);
        model.tick(0.1, true, true);
        assert!(!model.is_sprinting());
    }

    #[rstest]
    fn sprint_requires_movement(mut model: StaminaModel) {
        model.tick(0.5, false, true);
        assert!(!model.is_sprinting());
        assert_relative_eq!(model.current(), model.config().max_energy);
    }

    #[rstest]
    fn releasing_sprint_stops_drain(mut model: StaminaModel) {
        model.tick(1.0, true, true);
        model.tick(1.0, true, false);
        assert!(!model.is_sprinting());
        assert_relative_eq!(model.current(), 75.0);
    }

    #[rstest]
    fn recharge_rate_ramps_and_saturates(mut model: StaminaModel) {
        model.tick(2.0, true, true);
        let mut previous = model.recharge_rate();
        for _ in 0..40 {
            model.tick(0.1, false, false);
            assert!(model.recharge_rate() >= previous);
            assert!(model.recharge_rate() <= model.config().max_recharge_rate);
            previous = model.recharge_rate();
        }
        assert_relative_eq!(previous, model.config().max_recharge_rate);
    }

    #[rstest]
    fn sprinting_resets_recharge_rate(mut model: StaminaModel) {
        model.tick(2.0, true, true);
        model.tick(1.0, false, false);
        assert!(model.recharge_rate() > 0.0);
        model.tick(0.1, true, true);
        assert!(model.is_sprinting());
        assert_relative_eq!(model.recharge_rate(), 0.0);
    }

    #[rstest]
    #[case::negative(-1.0)]
    #[case::nan(f32::NAN)]
    #[case::infinite(f32::INFINITY)]
    fn bad_deltas_change_nothing(mut model: StaminaModel, #[case] delta: f32) {
        model.tick(delta, true, true);
        assert_relative_eq!(model.current(), model.config().max_energy);
    }

    #[rstest]
    #[case::max(f32::MAX)]
    #[case::huge(1e30)]
    fn huge_sprint_tick_empties_pool(mut model: StaminaModel, #[case] delta: f32) {
        model.tick(delta, true, true);
        assert_relative_eq!(model.current(), 0.0);
        assert_relative_eq!(model.recharge_rate(), 0.0);
        assert_relative_eq!(model.energy_fraction(), 0.0);
    }

    #[rstest]
    #[case::max(f32::MAX)]
    #[case::huge(1e30)]
    fn huge_rest_tick_saturates(mut model: StaminaModel, #[case] delta: f32) {
        model.tick(1.0, true, true);
        model.tick(delta, false, false);
        assert_relative_eq!(model.recharge_rate(), model.config().max_recharge_rate);
        model.tick(delta, false, false);
        assert_relative_eq!(model.current(), model.config().max_energy);
        assert_relative_eq!(model.energy_fraction(), 1.0);
    }

    #[rstest]
    fn fraction_tracks_pool(mut model: StaminaModel) {
        model.tick(2.0, true, true);
        assert_relative_eq!(model.energy_fraction(), 0.5);
    }

    #[test]
    fn threshold_above_pool_is_rejected() {
        let config = StaminaConfig {
            min_energy_to_sprint: 150.0,
            ..StaminaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { .. })
        ));
    }
}
