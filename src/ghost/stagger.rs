//! Temporary loss of control after a ghost is flung by an external impulse.
//!
//! The impulse itself belongs to the host physics. This component only
//! measures the out-of-control window in accumulated simulation time, so
//! tests can skip it by advancing time directly.

use bevy::prelude::{Component, Resource};
use serde::{Deserialize, Serialize};

use crate::config::{ensure_positive, ConfigError};
use crate::numeric::sanitize_delta;
use crate::{RECOVERY_DELAY, RECOVERY_SNAP_RANGE};

/// Tunables for stagger recovery.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Seconds before a flung ghost regains control.
    pub recovery_delay: f32,
    /// Search radius for snapping a recovered ghost back onto walkable
    /// ground.
    pub snap_range: f32,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            recovery_delay: RECOVERY_DELAY,
            snap_range: RECOVERY_SNAP_RANGE,
        }
    }
}

impl RecoveryConfig {
    /// Checks both tunables are positive.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonPositive`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("recovery.recovery_delay", self.recovery_delay)?;
        ensure_positive("recovery.snap_range", self.snap_range)
    }
}

/// Outcome of advancing a [`Stagger`] by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaggerTick {
    /// Not staggered.
    Steady,
    /// Still out of control, with this many seconds left.
    Recovering {
        /// Seconds until control returns.
        remaining: f32,
    },
    /// Control returned on this tick.
    Recovered,
}

/// Out-of-control window of one ghost.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Stagger {
    recovery_delay: f32,
    elapsed: Option<f32>,
}

impl Stagger {
    /// Creates a steady ghost that recovers `recovery_delay` seconds after
    /// each fling.
    #[must_use]
    pub const fn new(recovery_delay: f32) -> Self {
        Self {
            recovery_delay,
            elapsed: None,
        }
    }

    /// Starts the out-of-control window.
    ///
    /// A ghost already staggered ignores further flings. Returns whether the
    /// fling took effect.
    pub fn fling(&mut self) -> bool {
        if self.elapsed.is_some() {
            return false;
        }
        self.elapsed = Some(0.0);
        true
    }

    /// Whether the ghost is currently out of control.
    #[must_use]
    pub const fn is_staggered(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Accumulates `delta` and reports whether control has returned.
    pub fn tick(&mut self, delta: f32) -> StaggerTick {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return StaggerTick::Steady;
        };
        *elapsed += sanitize_delta(delta);
        if *elapsed >= self.recovery_delay {
            self.elapsed = None;
            StaggerTick::Recovered
        } else {
            StaggerTick::Recovering {
                remaining: self.recovery_delay - *elapsed,
            }
        }
    }
}
