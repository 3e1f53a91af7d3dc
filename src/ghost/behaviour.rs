//! Wander/chase state machine for a single ghost.

use bevy::prelude::Component;
use glam::Vec3;
use log::debug;
use rand::RngCore;

use crate::audio::CueSink;
use crate::navigation::{Navigation, Steering};
use crate::numeric::sanitize_delta;
use crate::vector_math::random_point_near;

use super::{GhostConfig, GhostId, GhostMode, GhostPositions, Heartbeat, NearestGhostRegistry};

/// Collaborators and frame inputs for one ghost tick.
///
/// Built fresh by the driving system for every ghost so each tick borrows the
/// shared registry, the world's navigation and audio, and the ghost's own
/// steering only for its duration.
pub struct GhostContext<'a> {
    /// Seconds elapsed since the previous tick.
    pub delta: f32,
    /// Player position, or `None` when no player is present.
    pub player: Option<Vec3>,
    /// Nearest-ghost registry for the session.
    pub registry: &'a mut NearestGhostRegistry,
    /// Positions of every live ghost this frame.
    pub positions: &'a dyn GhostPositions,
    /// Walkable-point query.
    pub navigation: &'a dyn Navigation,
    /// Movement commands for this ghost.
    pub steering: &'a mut dyn Steering,
    /// Destination of heartbeat cues.
    pub audio: &'a mut dyn CueSink,
    /// Randomness for wander sampling and pitch variation.
    pub rng: &'a mut dyn RngCore,
}

/// Behaviour state of one ghost.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Ghost {
    config: GhostConfig,
    mode: GhostMode,
    wander_timer: f32,
    heartbeat: Heartbeat,
}

impl Ghost {
    /// Creates a wandering ghost whose first tick picks a wander point.
    #[must_use]
    pub fn new(config: GhostConfig) -> Self {
        let wander_timer = config.wander_interval;
        Self {
            config,
            mode: GhostMode::Wandering,
            wander_timer,
            heartbeat: Heartbeat::default(),
        }
    }

    /// Current targeting mode.
    #[must_use]
    pub const fn mode(&self) -> GhostMode {
        self.mode
    }

    /// Seconds since the last wander pick.
    #[must_use]
    pub const fn wander_timer(&self) -> f32 {
        self.wander_timer
    }

    /// Tunables fixed at spawn.
    #[must_use]
    pub const fn config(&self) -> &GhostConfig {
        &self.config
    }

    /// Heartbeat accumulator.
    #[must_use]
    pub const fn heartbeat(&self) -> &Heartbeat {
        &self.heartbeat
    }

    /// Advances the ghost by one tick.
    ///
    /// Without a player the tick does nothing. Otherwise the ghost offers
    /// itself to the registry, beats the heartbeat if it holds the slot,
    /// applies chase hysteresis and issues its movement command. Returns the
    /// new mode when it changed this tick.
    pub fn tick(
        &mut self,
        id: GhostId,
        position: Vec3,
        ctx: &mut GhostContext<'_>,
    ) -> Option<GhostMode> {
        let player = ctx.player?;
        let delta = sanitize_delta(ctx.delta);
        let distance = position.distance(player);

        if ctx.registry.arbitrate(id, distance, player, ctx.positions) {
            let beat = self
                .heartbeat
                .update(&self.config.heartbeat, id, distance, delta, ctx.rng);
            if let Some(cue) = beat {
                ctx.audio.play_one_shot(cue);
            }
        }

        let transition = self.apply_hysteresis(distance, ctx.steering);

        match self.mode {
            GhostMode::Chasing => ctx.steering.set_destination(player),
            // A freshly abandoned chase keeps its zeroed timer for this tick.
            GhostMode::Wandering if transition.is_some() => {}
            GhostMode::Wandering => self.wander(position, delta, ctx),
        }

        transition
    }

    fn apply_hysteresis(
        &mut self,
        distance: f32,
        steering: &mut dyn Steering,
    ) -> Option<GhostMode> {
        let next = match self.mode {
            GhostMode::Wandering if distance <= self.config.detection_radius => GhostMode::Chasing,
            GhostMode::Chasing if distance > self.config.lose_radius => {
                self.wander_timer = 0.0;
                GhostMode::Wandering
            }
            _ => return None,
        };
        self.mode = next;
        steering.set_speed(self.config.speed_for(next));
        Some(next)
    }

    fn wander(&mut self, position: Vec3, delta: f32, ctx: &mut GhostContext<'_>) {
        self.wander_timer += delta;
        if self.wander_timer < self.config.wander_interval {
            return;
        }
        let radius = self.config.wander_radius;
        let sample = random_point_near(position, radius, ctx.rng);
        let target = ctx
            .navigation
            .nearest_traversable(sample, radius)
            .unwrap_or_else(|| {
                debug!("no traversable point near {sample:?}; holding position");
                position
            });
        ctx.steering.set_destination(target);
        self.wander_timer = 0.0;
    }
}
