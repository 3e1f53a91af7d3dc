//! Pickups, monster contact and the weapon.
//!
//! All checks are proximity tests against the configured radii. Collision
//! shapes and trigger volumes belong to the host.

use bevy::prelude::*;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::{Monster, MonsterTemper, Pickup, Player};
use crate::config::{ensure_positive, ConfigError};
use crate::outcome::GameOutcome;
use crate::player::{Inventory, PlayerActions, WeaponUse};
use crate::{CONTACT_RADIUS, PICKUP_RADIUS, WEAPON_RANGE, WEAPON_USES};

/// Reach of pickups, contacts and the weapon.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Distance at which an item is collected.
    pub pickup_radius: f32,
    /// Distance at which a monster counts as touched.
    pub contact_radius: f32,
    /// Reach of a weapon swing.
    pub weapon_range: f32,
    /// Charges granted by a weapon pickup.
    pub weapon_uses: u32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pickup_radius: PICKUP_RADIUS,
            contact_radius: CONTACT_RADIUS,
            weapon_range: WEAPON_RANGE,
            weapon_uses: WEAPON_USES,
        }
    }
}

impl InteractionConfig {
    /// Validates the radii.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonPositive`] for the first radius that is not
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("interaction.pickup_radius", self.pickup_radius)?;
        ensure_positive("interaction.contact_radius", self.contact_radius)?;
        ensure_positive("interaction.weapon_range", self.weapon_range)
    }
}

/// Outcome of the player touching a monster.
#[must_use]
pub const fn contact_outcome(temper: MonsterTemper, holding_candy: bool) -> GameOutcome {
    match temper {
        MonsterTemper::Friendly if holding_candy => GameOutcome::Won,
        MonsterTemper::Friendly | MonsterTemper::Dangerous => GameOutcome::Died,
    }
}

/// Monsters caught by one weapon swing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Strike {
    /// Dangerous monsters to destroy.
    pub destroyed: Vec<Entity>,
    /// Whether a friendly monster was hit.
    pub hit_friendly: bool,
}

/// Resolves a swing from `origin` against `monsters`.
#[must_use]
pub fn resolve_strike(
    origin: Vec3,
    range: f32,
    monsters: impl IntoIterator<Item = (Entity, Vec3, MonsterTemper)>,
) -> Strike {
    let mut strike = Strike::default();
    for (entity, position, temper) in monsters {
        if origin.distance(position) > range {
            continue;
        }
        match temper {
            MonsterTemper::Dangerous => strike.destroyed.push(entity),
            MonsterTemper::Friendly => strike.hit_friendly = true,
        }
    }
    strike
}

/// Collects items within reach of the player.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn pickup_system(
    mut commands: Commands,
    config: Res<InteractionConfig>,
    mut players: Query<(&Transform, &mut Inventory), With<Player>>,
    pickups: Query<(Entity, &Transform, &Pickup)>,
) {
    for (player, mut inventory) in &mut players {
        for (entity, transform, pickup) in &pickups {
            if player.translation.distance(transform.translation) <= config.pickup_radius {
                inventory.pick_up(pickup.kind, config.weapon_uses);
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Ends the attempt when the player touches a monster.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn contact_system(
    config: Res<InteractionConfig>,
    players: Query<(&Transform, &Inventory), With<Player>>,
    monsters: Query<(&Transform, &Monster), Without<Player>>,
    mut outcome: ResMut<GameOutcome>,
) {
    for (player, inventory) in &players {
        for (transform, monster) in &monsters {
            if player.translation.distance(transform.translation) > config.contact_radius {
                continue;
            }
            let result = contact_outcome(monster.temper, inventory.holding_candy());
            debug!("player touched {:?} monster", monster.temper);
            if outcome.settle(result) {
                return;
            }
        }
    }
}

/// Handles equip toggles and weapon swings, then clears the presses.
///
/// A swing needs the weapon in hand. Dangerous monsters in range are
/// destroyed; hitting a friendly one loses the game at once.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn weapon_system(
    mut commands: Commands,
    mut actions: ResMut<PlayerActions>,
    config: Res<InteractionConfig>,
    mut players: Query<(&Transform, &mut Inventory), With<Player>>,
    monsters: Query<(Entity, &Transform, &Monster), Without<Player>>,
    mut outcome: ResMut<GameOutcome>,
) {
    let pressed = std::mem::take(actions.as_mut());
    for (player, mut inventory) in &mut players {
        if pressed.toggle_equip {
            inventory.toggle_equip();
        }
        if !pressed.attack || !inventory.weapon_equipped() {
            continue;
        }
        if inventory.use_weapon() == WeaponUse::OutOfUses {
            continue;
        }
        let strike = resolve_strike(
            player.translation,
            config.weapon_range,
            monsters
                .iter()
                .map(|(entity, transform, monster)| (entity, transform.translation, monster.temper)),
        );
        for entity in &strike.destroyed {
            info!("dangerous monster {entity} destroyed");
            commands.entity(*entity).despawn();
        }
        if strike.hit_friendly {
            info!("friendly monster struck");
            outcome.settle(GameOutcome::Died);
        }
    }
}
