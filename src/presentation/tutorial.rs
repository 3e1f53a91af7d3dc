//! Tutorial messages shown one after another with a fade in and out.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ensure_positive, ConfigError};
use crate::numeric::{clamp01, sanitize_delta};
use crate::{TUTORIAL_DISPLAY_DURATION, TUTORIAL_FADE_DURATION};

/// Messages and pacing of the tutorial.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialConfig {
    /// Messages in display order.
    pub messages: Vec<String>,
    /// Seconds spent fading each message in and again out.
    pub fade_duration: f32,
    /// Seconds each message stays fully visible.
    pub display_duration: f32,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            fade_duration: TUTORIAL_FADE_DURATION,
            display_duration: TUTORIAL_DISPLAY_DURATION,
        }
    }
}

impl TutorialConfig {
    /// Validates both durations.
    ///
    /// # Errors
    /// Returns [`ConfigError::NonPositive`] for a duration that is not
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("tutorial.fade_duration", self.fade_duration)?;
        ensure_positive("tutorial.display_duration", self.display_duration)
    }
}

/// Stage of the message currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialPhase {
    /// Nothing left to show.
    Idle,
    /// Alpha rising towards 1.
    FadingIn,
    /// Fully visible.
    Displaying,
    /// Alpha falling towards 0.
    FadingOut,
}

/// Steps through the tutorial messages.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TutorialSequencer {
    messages: Vec<String>,
    fade_duration: f32,
    display_duration: f32,
    index: usize,
    phase: TutorialPhase,
    timer: f32,
    alpha: f32,
}

impl Default for TutorialSequencer {
    fn default() -> Self {
        Self::new(&TutorialConfig::default())
    }
}

impl TutorialSequencer {
    /// Starts fading in the first message, or idles when there are none.
    #[must_use]
    pub fn new(config: &TutorialConfig) -> Self {
        let phase = if config.messages.is_empty() {
            TutorialPhase::Idle
        } else {
            TutorialPhase::FadingIn
        };
        Self {
            messages: config.messages.clone(),
            fade_duration: config.fade_duration,
            display_duration: config.display_duration,
            index: 0,
            phase,
            timer: 0.0,
            alpha: 0.0,
        }
    }

    /// Advances the sequence by `delta` seconds.
    ///
    /// At most one phase change happens per call.
    pub fn update(&mut self, delta: f32) {
        let delta = sanitize_delta(delta);
        match self.phase {
            TutorialPhase::Idle => {}
            TutorialPhase::FadingIn => {
                self.timer += delta;
                self.alpha = clamp01(self.timer / self.fade_duration);
                if self.alpha >= 1.0 {
                    self.enter(TutorialPhase::Displaying);
                }
            }
            TutorialPhase::Displaying => {
                self.timer += delta;
                if self.timer >= self.display_duration {
                    self.enter(TutorialPhase::FadingOut);
                }
            }
            TutorialPhase::FadingOut => {
                self.timer += delta;
                self.alpha = clamp01(1.0 - self.timer / self.fade_duration);
                if self.alpha <= 0.0 {
                    self.index += 1;
                    if self.index < self.messages.len() {
                        self.enter(TutorialPhase::FadingIn);
                    } else {
                        self.enter(TutorialPhase::Idle);
                    }
                }
            }
        }
    }

    const fn enter(&mut self, phase: TutorialPhase) {
        self.phase = phase;
        self.timer = 0.0;
    }

    /// Message on screen, or `None` once the tutorial is over.
    #[must_use]
    pub fn current_text(&self) -> Option<&str> {
        if self.phase == TutorialPhase::Idle {
            return None;
        }
        self.messages.get(self.index).map(String::as_str)
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TutorialPhase {
        self.phase
    }

    /// Current text alpha.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }
}

/// Advances the tutorial each frame.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn tutorial_system(time: Res<Time>, mut tutorial: ResMut<TutorialSequencer>) {
    tutorial.update(time.delta_secs());
}
