//! Player state: energy pool, movement, look and inventory.
//!
//! Input arrives through the [`PlayerInput`] and [`PlayerActions`]
//! resources. Device handling is left to the host, which writes these once
//! per frame.

mod inventory;
mod movement;
mod stamina;
mod systems;

use bevy::prelude::{Bundle, Resource, Transform, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::Player;
use crate::config::{ensure_positive, ensure_unit, ConfigError};
use crate::presentation::FootstepCadence;
use crate::{LOOK_SPEED, MOVE_DEADZONE, PITCH_LIMIT_DEGREES, SPRINT_SPEED, WALK_SPEED};

pub use inventory::{Inventory, WeaponUse};
pub use movement::{is_moving, planar_displacement, PlayerLook, PlayerVelocity};
pub use stamina::{StaminaConfig, StaminaModel};
pub use systems::{player_movement_system, player_stamina_system};

/// Movement and look tunables.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walking speed in units per second.
    pub walk_speed: f32,
    /// Sprinting speed in units per second.
    pub sprint_speed: f32,
    /// Degrees turned per unit of look input.
    pub look_speed: f32,
    /// Largest pitch magnitude in degrees.
    pub pitch_limit_degrees: f32,
    /// Movement input magnitude that counts as moving.
    pub move_deadzone: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            look_speed: LOOK_SPEED,
            pitch_limit_degrees: PITCH_LIMIT_DEGREES,
            move_deadzone: MOVE_DEADZONE,
        }
    }
}

impl PlayerConfig {
    /// Validates the tunables.
    ///
    /// # Errors
    /// Returns the first non-positive speed or limit, or
    /// [`ConfigError::OutOfUnitRange`] for a deadzone outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("player.walk_speed", self.walk_speed)?;
        ensure_positive("player.sprint_speed", self.sprint_speed)?;
        ensure_positive("player.look_speed", self.look_speed)?;
        ensure_positive("player.pitch_limit_degrees", self.pitch_limit_degrees)?;
        ensure_unit("player.move_deadzone", self.move_deadzone)
    }

    /// Speed for the current sprint state.
    #[must_use]
    pub const fn speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_speed
        } else {
            self.walk_speed
        }
    }
}

/// Components making up the player entity.
#[must_use]
pub fn player_bundle(position: Vec3, stamina: &StaminaConfig) -> impl Bundle {
    (
        Player,
        StaminaModel::new(stamina.clone()),
        PlayerLook::default(),
        PlayerVelocity::default(),
        Inventory::default(),
        FootstepCadence::default(),
        Transform::from_translation(position),
    )
}

/// Continuous input sampled by the host each frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Stick or WASD vector; `y` is forward.
    pub movement: Vec2,
    /// Look delta for this frame; `x` turns, `y` tilts.
    pub look: Vec2,
    /// Whether the sprint button is held.
    pub sprint_held: bool,
}

/// Button presses consumed once by the interaction systems.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerActions {
    /// Toggle the weapon in or out of hand.
    pub toggle_equip: bool,
    /// Swing the equipped weapon.
    pub attack: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, WALK_SPEED)]
    #[case(true, SPRINT_SPEED)]
    fn speed_follows_sprint(#[case] sprinting: bool, #[case] expected: f32) {
        assert!((PlayerConfig::default().speed(sprinting) - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn deadzone_above_one_is_rejected() {
        let config = PlayerConfig {
            move_deadzone: 1.5,
            ..PlayerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfUnitRange { .. })
        ));
    }
}
