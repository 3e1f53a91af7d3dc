//! Systems driving ghost behaviour inside the Bevy schedule.

use bevy::ecs::lifecycle::Remove;
use bevy::ecs::prelude::On;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use hashbrown::HashMap;
use log::{debug, warn};

use crate::audio::AudioOutbox;
use crate::components::Player;
use crate::navigation::{NavAgent, NavArea, Navigation};
use crate::numeric::sanitize_delta;
use crate::rng::GameRng;

use super::{
    Ghost, GhostContext, GhostId, NearestGhostRegistry, RecoveryConfig, Stagger, StaggerTick,
};

type GhostRow<'w> = (
    Entity,
    &'w mut Ghost,
    &'w Transform,
    &'w mut NavAgent,
);

/// Shared world state every ghost tick borrows.
#[derive(SystemParam)]
pub struct GhostWorld<'w> {
    /// Nearest-ghost registry for the session.
    pub registry: ResMut<'w, NearestGhostRegistry>,
    /// Walkable area of the level.
    pub navigation: Res<'w, NavArea>,
    /// Cue queue drained by the host audio layer.
    pub audio: ResMut<'w, AudioOutbox>,
    /// Session randomness.
    pub rng: ResMut<'w, GameRng>,
}

/// Ticks every ghost once.
///
/// Ghost positions are snapshotted before any ghost runs so that registry
/// arbitration compares fresh distances regardless of iteration order.
/// Without a player every ghost tick is a no-op, so each keeps heading for
/// its last target, and a warning is logged once.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn ghost_tick_system(
    time: Res<Time>,
    players: Query<&Transform, (With<Player>, Without<Ghost>)>,
    mut ghosts: Query<GhostRow<'_>>,
    mut world: GhostWorld,
    mut warned_missing_player: Local<bool>,
) {
    let player = players.single().ok().map(|transform| transform.translation);
    if player.is_none() && !*warned_missing_player {
        warn!("no single player entity found; ghosts keep their last target");
        *warned_missing_player = true;
    } else if player.is_some() {
        *warned_missing_player = false;
    }

    let positions: HashMap<GhostId, Vec3> = ghosts
        .iter()
        .map(|(entity, _, transform, _)| (GhostId::from(entity), transform.translation))
        .collect();
    let delta = sanitize_delta(time.delta_secs());

    for (entity, mut ghost, transform, mut agent) in &mut ghosts {
        let mut ctx = GhostContext {
            delta,
            player,
            registry: world.registry.as_mut(),
            positions: &positions,
            navigation: world.navigation.as_ref(),
            steering: agent.as_mut(),
            audio: world.audio.as_mut(),
            rng: &mut world.rng.0,
        };
        if let Some(mode) = ghost.tick(GhostId::from(entity), transform.translation, &mut ctx) {
            debug!("ghost {entity} switched to {mode:?}");
        }
    }
}

/// Releases the nearest-ghost slot when its holder loses the [`Ghost`]
/// component or is despawned.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn release_nearest_on_remove(
    removed: On<Remove, Ghost>,
    mut registry: ResMut<NearestGhostRegistry>,
) {
    let entity = removed.event().entity;
    if registry.release(GhostId::from(entity)) {
        debug!("nearest ghost {entity} removed; slot cleared");
    }
}

/// Advances stagger windows, disabling steering while a ghost is out of
/// control and snapping it back onto walkable ground when it recovers.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn stagger_recovery_system(
    time: Res<Time>,
    navigation: Res<NavArea>,
    config: Res<RecoveryConfig>,
    mut ghosts: Query<(Entity, &mut Stagger, &mut NavAgent, &mut Transform)>,
) {
    let delta = sanitize_delta(time.delta_secs());
    for (entity, mut stagger, mut agent, mut transform) in &mut ghosts {
        match stagger.tick(delta) {
            StaggerTick::Steady => {}
            StaggerTick::Recovering { .. } => {
                if agent.is_enabled() {
                    agent.set_enabled(false);
                }
            }
            StaggerTick::Recovered => {
                match navigation.nearest_traversable(transform.translation, config.snap_range) {
                    Some(point) => transform.translation = point,
                    None => warn!("ghost {entity} found no walkable ground nearby; keeping position"),
                }
                agent.set_enabled(true);
                debug!("ghost {entity} recovered control");
            }
        }
    }
}

/// Request to knock a ghost out of control.
///
/// The host applies the physical impulse; this only starts the stagger
/// window and suspends steering.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlingGhost {
    /// Ghost entity to fling.
    pub ghost: Entity,
}

/// Starts a stagger window on the flung ghost.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
pub fn fling_ghost(flung: On<FlingGhost>, mut ghosts: Query<(&mut Stagger, &mut NavAgent)>) {
    let FlingGhost { ghost } = *flung.event();
    let Ok((mut stagger, mut agent)) = ghosts.get_mut(ghost) else {
        warn!("fling requested for {ghost}, which cannot stagger");
        return;
    };
    if stagger.fling() {
        agent.set_enabled(false);
        debug!("ghost {ghost} flung");
    }
}
