//! Distance-reactive heartbeat owned by the ghost nearest to the player.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::audio::{CueSource, SoundCue};
use crate::config::{ensure_ordered, ensure_positive, ensure_unit, ConfigError};
use crate::numeric::{clamp01, lerp};
use crate::{
    HEARTBEAT_CLIP, HEARTBEAT_PITCH_MAX, HEARTBEAT_PITCH_MIN, MAX_HEARTBEAT_DISTANCE,
    MAX_HEARTBEAT_INTERVAL, MAX_HEARTBEAT_VOLUME, MIN_HEARTBEAT_INTERVAL, MIN_HEARTBEAT_VOLUME,
};

use super::GhostId;

/// Tunables for the heartbeat cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartbeatConfig {
    /// Distance beyond which the heartbeat is silent.
    pub max_distance: f32,
    /// Beat interval at distance zero.
    pub min_interval: f32,
    /// Beat interval at `max_distance`.
    pub max_interval: f32,
    /// Volume at `max_distance`.
    pub min_volume: f32,
    /// Volume at distance zero.
    pub max_volume: f32,
    /// Clip to play. `None` silences the heartbeat entirely.
    pub clip: Option<String>,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            max_distance: MAX_HEARTBEAT_DISTANCE,
            min_interval: MIN_HEARTBEAT_INTERVAL,
            max_interval: MAX_HEARTBEAT_INTERVAL,
            min_volume: MIN_HEARTBEAT_VOLUME,
            max_volume: MAX_HEARTBEAT_VOLUME,
            clip: Some(HEARTBEAT_CLIP.to_owned()),
        }
    }
}

impl HeartbeatConfig {
    /// Checks that distances and intervals are positive and ranges ordered.
    ///
    /// # Errors
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("heartbeat.max_distance", self.max_distance)?;
        ensure_positive("heartbeat.min_interval", self.min_interval)?;
        ensure_ordered("heartbeat.interval", self.min_interval, self.max_interval)?;
        ensure_unit("heartbeat.min_volume", self.min_volume)?;
        ensure_unit("heartbeat.max_volume", self.max_volume)?;
        ensure_ordered("heartbeat.volume", self.min_volume, self.max_volume)
    }

    /// Distance mapped into `[0, 1]` across the heartbeat range.
    #[must_use]
    pub fn normalised_distance(&self, distance: f32) -> f32 {
        clamp01(distance / self.max_distance)
    }

    /// Seconds between beats at `distance`; grows with distance.
    #[must_use]
    pub fn interval_at(&self, distance: f32) -> f32 {
        lerp(
            self.min_interval,
            self.max_interval,
            self.normalised_distance(distance),
        )
    }

    /// Beat volume at `distance`; falls with distance.
    #[must_use]
    pub fn volume_at(&self, distance: f32) -> f32 {
        lerp(
            self.max_volume,
            self.min_volume,
            self.normalised_distance(distance),
        )
    }

    /// Whether a ghost at `distance` can be heard at all.
    #[must_use]
    pub fn is_audible(&self, distance: f32) -> bool {
        self.clip.is_some() && distance <= self.max_distance
    }
}

/// Beat accumulator for one ghost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Heartbeat {
    timer: f32,
}

impl Heartbeat {
    /// Seconds accumulated since the last beat.
    #[must_use]
    pub const fn timer(&self) -> f32 {
        self.timer
    }

    /// Advances the accumulator and returns a cue when a beat is due.
    ///
    /// Out of range or without a clip the accumulator is left untouched and
    /// nothing plays.
    pub fn update(
        &mut self,
        config: &HeartbeatConfig,
        ghost: GhostId,
        distance: f32,
        delta: f32,
        rng: &mut dyn RngCore,
    ) -> Option<SoundCue> {
        let clip = config
            .clip
            .as_ref()
            .filter(|_| distance <= config.max_distance)?;

        self.timer += delta;
        if self.timer < config.interval_at(distance) {
            return None;
        }
        self.timer = 0.0;
        Some(SoundCue {
            clip: clip.clone(),
            volume: config.volume_at(distance),
            pitch: rng.gen_range(HEARTBEAT_PITCH_MIN..=HEARTBEAT_PITCH_MAX),
            source: CueSource::Heartbeat { ghost },
        })
    }
}
