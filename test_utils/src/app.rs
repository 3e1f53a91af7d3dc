//! Headless Bevy apps with the gameplay plugins installed.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use haunt::player::player_bundle;
use haunt::spawner::{monster_bundle, MonsterSpawn};
use haunt::{
    GameConfig, HauntPlugin, MonsterTemper, NavArea, Pickup, PickupKind, PresentationPlugin,
};

use crate::fixtures::flat_nav_area;

/// Simulated frame length used by [`headless_app`].
pub const FRAME: Duration = Duration::from_millis(100);

/// Builds an app with `MinimalPlugins`, a manual clock advancing [`FRAME`]
/// per update, a 50-unit flat floor and both gameplay plugins.
///
/// No update has run yet; call [`tick`] to start the schedule. The first
/// update sees a zero delta, so motion starts on the second.
pub fn headless_app(config: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource::<NavArea>(flat_nav_area(50.0))
        .add_plugins(PresentationPlugin::from_config(&config))
        .add_plugins(HauntPlugin::new(config));
    app
}

/// Runs `frames` updates.
pub fn tick(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Spawns the player at `position` with default stamina.
pub fn spawn_test_player(app: &mut App, position: Vec3) -> Entity {
    let stamina = app
        .world()
        .get_resource::<haunt::player::StaminaConfig>()
        .cloned()
        .unwrap_or_default();
    app.world_mut()
        .spawn(player_bundle(position, &stamina))
        .id()
}

/// Spawns a dangerous monster at `position` using the app's ghost tunables.
pub fn spawn_test_ghost(app: &mut App, position: Vec3) -> Entity {
    spawn_test_monster(app, MonsterTemper::Dangerous, position)
}

/// Spawns a monster of the given temper at `position`.
pub fn spawn_test_monster(app: &mut App, temper: MonsterTemper, position: Vec3) -> Entity {
    let ghost = app
        .world()
        .get_resource::<haunt::GhostConfig>()
        .cloned()
        .unwrap_or_default();
    let recovery = app
        .world()
        .get_resource::<haunt::ghost::RecoveryConfig>()
        .cloned()
        .unwrap_or_default();
    let spawn = MonsterSpawn {
        temper,
        position,
        prompt: "Boo".to_owned(),
    };
    app.world_mut()
        .spawn(monster_bundle(spawn, &ghost, &recovery, 2.0))
        .id()
}

/// Drops a pickup of `kind` at `position`.
pub fn spawn_test_pickup(app: &mut App, kind: PickupKind, position: Vec3) -> Entity {
    app.world_mut()
        .spawn((Pickup { kind }, Transform::from_translation(position)))
        .id()
}
