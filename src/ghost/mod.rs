//! Ghost enemy behaviour.
//!
//! Each ghost runs a two-state machine (wander or chase) and offers itself to
//! the [`NearestGhostRegistry`] every tick. Only the registered ghost drives
//! the heartbeat cue. Ghosts can be flung out of control for a while and
//! recover through [`Stagger`].

mod behaviour;
mod heartbeat;
mod registry;
mod stagger;
mod systems;

use bevy::prelude::{Entity, Reflect, Resource};
use serde::{Deserialize, Serialize};

use crate::config::{ensure_positive, ConfigError};
use crate::{
    DETECTION_RADIUS, GHOST_CHASE_SPEED, GHOST_WANDER_SPEED, LOSE_RADIUS, WANDER_INTERVAL,
    WANDER_RADIUS,
};

pub use behaviour::{Ghost, GhostContext};
pub use heartbeat::{Heartbeat, HeartbeatConfig};
pub use registry::{GhostPositions, NearestGhostRegistry};
pub use stagger::{RecoveryConfig, Stagger, StaggerTick};
pub use systems::{
    fling_ghost, ghost_tick_system, release_nearest_on_remove, stagger_recovery_system, FlingGhost,
};

/// Opaque identity of a spawned ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GhostId(pub u64);

impl From<Entity> for GhostId {
    fn from(entity: Entity) -> Self {
        Self(entity.to_bits())
    }
}

/// Targeting mode of a ghost.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum GhostMode {
    /// Roaming between random reachable points.
    #[default]
    Wandering,
    /// Homing in on the player every tick.
    Chasing,
}

/// Per-ghost tunables, fixed at spawn.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Radius around the ghost within which wander points are sampled.
    pub wander_radius: f32,
    /// Seconds between wander point picks.
    pub wander_interval: f32,
    /// Distance at which the ghost starts chasing.
    pub detection_radius: f32,
    /// Distance beyond which a chase is abandoned. Must not be smaller than
    /// `detection_radius`.
    pub lose_radius: f32,
    /// Speed while wandering.
    pub wander_speed: f32,
    /// Speed while chasing.
    pub chase_speed: f32,
    /// Heartbeat tunables.
    pub heartbeat: HeartbeatConfig,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            wander_radius: WANDER_RADIUS,
            wander_interval: WANDER_INTERVAL,
            detection_radius: DETECTION_RADIUS,
            lose_radius: LOSE_RADIUS,
            wander_speed: GHOST_WANDER_SPEED,
            chase_speed: GHOST_CHASE_SPEED,
            heartbeat: HeartbeatConfig::default(),
        }
    }
}

impl GhostConfig {
    /// Validates the tunables.
    ///
    /// The chase hysteresis requires `lose_radius >= detection_radius`;
    /// otherwise a ghost standing between the two radii would flip between
    /// chasing and wandering every tick.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvertedChaseHysteresis`] when the radii are
    /// inverted, or the first non-positive tunable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("ghost.wander_radius", self.wander_radius)?;
        ensure_positive("ghost.wander_interval", self.wander_interval)?;
        ensure_positive("ghost.detection_radius", self.detection_radius)?;
        ensure_positive("ghost.wander_speed", self.wander_speed)?;
        ensure_positive("ghost.chase_speed", self.chase_speed)?;
        if self.lose_radius.is_nan() || self.lose_radius < self.detection_radius {
            return Err(ConfigError::InvertedChaseHysteresis {
                detection: self.detection_radius,
                lose: self.lose_radius,
            });
        }
        self.heartbeat.validate()
    }

    /// Speed matching `mode`.
    #[must_use]
    pub const fn speed_for(&self, mode: GhostMode) -> f32 {
        match mode {
            GhostMode::Wandering => self.wander_speed,
            GhostMode::Chasing => self.chase_speed,
        }
    }
}
