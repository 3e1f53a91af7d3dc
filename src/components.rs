//! ECS component types shared between gameplay systems.
//! Markers for the player, monsters and pickups, plus prompt text metadata.
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker for the controllable player entity.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Player;

/// Whether touching a monster is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterTemper {
    /// Harmless if the player brings candy; hitting it ends the game.
    Friendly,
    /// Kills on contact; can be destroyed with the weapon.
    Dangerous,
}

/// A spawned monster and its temper.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monster {
    /// Temper assigned at spawn.
    pub temper: MonsterTemper,
}

/// Kinds of collectible item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Candy offered to a friendly monster.
    Candy,
    /// Weapon with a limited number of uses.
    Weapon,
}

/// A collectible item lying in the world.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickup {
    /// What collecting it grants.
    pub kind: PickupKind,
}

/// Dialogue prompt floating above a monster.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Prompt {
    /// Text shown to the player.
    pub text: String,
    /// Height of the text above the monster's origin.
    pub height_offset: f32,
}
