//! Demo level used by the headless binary.

use bevy::prelude::*;

use crate::components::{Pickup, PickupKind};
use crate::navigation::{NavArea, WalkableRegion};
use crate::player::{player_bundle, StaminaConfig};

/// Half extent of the square demo floor.
pub const DEMO_FLOOR_HALF_EXTENT: f32 = 20.0;

/// Where the player starts in the demo level.
pub const DEMO_PLAYER_START: Vec3 = Vec3::new(0.0, 0.0, 12.0);

/// Spawns a flat square floor, the player and one of each pickup.
///
/// Monsters come from the level roster once startup has finished.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn spawn_demo_world(mut commands: Commands, stamina: Res<StaminaConfig>) {
    commands.insert_resource(NavArea::new(vec![WalkableRegion::new(
        Vec2::splat(-DEMO_FLOOR_HALF_EXTENT),
        Vec2::splat(DEMO_FLOOR_HALF_EXTENT),
        0.0,
    )]));

    commands.spawn((player_bundle(DEMO_PLAYER_START, &stamina), Name::new("Player")));
    commands.spawn((
        Pickup {
            kind: PickupKind::Candy,
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, 9.0)),
        Name::new("Candy"),
    ));
    commands.spawn((
        Pickup {
            kind: PickupKind::Weapon,
        },
        Transform::from_translation(Vec3::new(0.0, 0.0, 7.0)),
        Name::new("Weapon"),
    ));
}
