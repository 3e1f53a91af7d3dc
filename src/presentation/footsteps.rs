//! Footstep cadence scaled by the player's ground speed.
//!
//! Faster movement fills the step accumulator quicker and gives slightly
//! higher, louder steps. Standing still drains the accumulator slowly so
//! resuming does not fire a step straight away.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioOutbox, CueSink, CueSource, SoundCue};
use crate::components::Player;
use crate::config::{ensure_non_negative, ensure_ordered, ensure_positive, ConfigError};
use crate::numeric::{clamp01, inverse_lerp, lerp, sanitize_delta};
use crate::player::PlayerVelocity;
use crate::vector_math::horizontal_speed;
use crate::{
    FOOTSTEP_BASE_INTERVAL, FOOTSTEP_CLIP, FOOTSTEP_DECAY_RATE, FOOTSTEP_MIN_SPEED,
    FOOTSTEP_PITCH_MAX, FOOTSTEP_PITCH_MIN, FOOTSTEP_RATE_MULTIPLIER, FOOTSTEP_REFERENCE_SPEED,
};

const MIN_SPEED_FACTOR: f32 = 0.1;
const MAX_SPEED_FACTOR: f32 = 3.0;
const SCALE_FACTOR_CEILING: f32 = 2.0;

/// Footstep tunables.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootstepConfig {
    /// Speed that produces one step per `base_interval` before the rate
    /// multiplier.
    pub reference_speed: f32,
    /// Accumulated progress that triggers a step.
    pub base_interval: f32,
    /// Speeds at or below this count as standing still.
    pub min_speed: f32,
    /// Extra multiplier on step frequency.
    pub rate_multiplier: f32,
    /// Base step volume.
    pub volume: f32,
    /// Pitch at the slowest pace.
    pub pitch_min: f32,
    /// Pitch at the fastest pace.
    pub pitch_max: f32,
    /// Progress lost per idle second.
    pub decay_rate: f32,
    /// Step clip; no steps are heard without one.
    pub clip: Option<String>,
}

impl Default for FootstepConfig {
    fn default() -> Self {
        Self {
            reference_speed: FOOTSTEP_REFERENCE_SPEED,
            base_interval: FOOTSTEP_BASE_INTERVAL,
            min_speed: FOOTSTEP_MIN_SPEED,
            rate_multiplier: FOOTSTEP_RATE_MULTIPLIER,
            volume: 1.0,
            pitch_min: FOOTSTEP_PITCH_MIN,
            pitch_max: FOOTSTEP_PITCH_MAX,
            decay_rate: FOOTSTEP_DECAY_RATE,
            clip: Some(FOOTSTEP_CLIP.to_owned()),
        }
    }
}

impl FootstepConfig {
    /// Validates the tunables.
    ///
    /// # Errors
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("footsteps.reference_speed", self.reference_speed)?;
        ensure_positive("footsteps.base_interval", self.base_interval)?;
        ensure_positive("footsteps.rate_multiplier", self.rate_multiplier)?;
        ensure_non_negative("footsteps.min_speed", self.min_speed)?;
        ensure_non_negative("footsteps.volume", self.volume)?;
        ensure_non_negative("footsteps.decay_rate", self.decay_rate)?;
        ensure_ordered("footsteps.pitch", self.pitch_min, self.pitch_max)
    }

    /// Pace multiplier for a horizontal speed.
    #[must_use]
    pub fn speed_factor(&self, speed: f32) -> f32 {
        (speed / self.reference_speed.max(0.01)).clamp(MIN_SPEED_FACTOR, MAX_SPEED_FACTOR)
            * self.rate_multiplier
    }
}

/// Step accumulator carried by the player.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct FootstepCadence {
    progress: f32,
}

impl FootstepCadence {
    /// Advances the cadence and returns a step cue when one is due.
    pub fn update(&mut self, config: &FootstepConfig, speed: f32, delta: f32) -> Option<SoundCue> {
        let delta = sanitize_delta(delta);
        let clip = match config.clip.as_ref() {
            Some(clip) if speed > config.min_speed => clip,
            _ => {
                self.progress = delta.mul_add(-config.decay_rate, self.progress).max(0.0);
                return None;
            }
        };

        let factor = config.speed_factor(speed);
        self.progress += delta * factor;
        if self.progress < config.base_interval {
            return None;
        }
        self.progress = 0.0;
        let pace = inverse_lerp(MIN_SPEED_FACTOR, SCALE_FACTOR_CEILING, factor);
        Some(SoundCue {
            clip: clip.clone(),
            volume: config.volume * clamp01(0.5f32.mul_add(pace, 0.5)),
            pitch: lerp(config.pitch_min, config.pitch_max, pace),
            source: CueSource::Footstep,
        })
    }

    /// Progress towards the next step.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }
}

/// Emits footsteps for the player from its last movement velocity.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn footstep_system(
    time: Res<Time>,
    config: Res<FootstepConfig>,
    mut players: Query<(&PlayerVelocity, &mut FootstepCadence), With<Player>>,
    mut audio: ResMut<AudioOutbox>,
) {
    for (velocity, mut cadence) in &mut players {
        if let Some(cue) = cadence.update(&config, horizontal_speed(velocity.0), time.delta_secs())
        {
            audio.play_one_shot(cue);
        }
    }
}
