//! Centred energy bar driven by the player's stamina.
//!
//! The bar fills from the middle outwards, so each half shows half the
//! displayed fill. Its colour ramps from grey through red to green and the
//! whole bar fades away while energy is full.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Player;
use crate::config::{ensure_non_negative, ensure_positive, ensure_unit, ConfigError};
use crate::numeric::{clamp01, inverse_lerp, lerp, sanitize_delta};
use crate::player::StaminaModel;
use crate::{
    ENERGY_BAR_FADE_OUT_ALPHA, ENERGY_BAR_FADE_SPEED, ENERGY_BAR_FULL_THRESHOLD,
    ENERGY_BAR_INVISIBLE_THRESHOLD, ENERGY_BAR_LOW_THRESHOLD, ENERGY_BAR_TRANSITION_SPEED,
};

/// Linear RGBA colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    /// Opaque green.
    pub const GREEN: Self = Self([0.0, 1.0, 0.0, 1.0]);
    /// Opaque red.
    pub const RED: Self = Self([1.0, 0.0, 0.0, 1.0]);
    /// Opaque mid grey.
    pub const GRAY: Self = Self([0.5, 0.5, 0.5, 1.0]);

    /// Blends towards `other` by `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn mix(self, other: Self, t: f32) -> Self {
        let [r0, g0, b0, a0] = self.0;
        let [r1, g1, b1, a1] = other.0;
        Self([
            lerp(r0, r1, t),
            lerp(g0, g1, t),
            lerp(b0, b1, t),
            lerp(a0, a1, t),
        ])
    }
}

/// Look and animation of the energy bar.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyBarConfig {
    /// Ease the fill towards its target instead of snapping.
    pub smooth_transition: bool,
    /// Easing rate of the fill.
    pub transition_speed: f32,
    /// Fill at which the colour switches from the low ramp to the full ramp.
    pub low_threshold: f32,
    /// Energy fraction at or below which the bar is hidden.
    pub invisible_threshold: f32,
    /// Energy fraction at or above which the bar fades out.
    pub full_threshold: f32,
    /// Alpha approached while energy is full.
    pub fade_out_alpha: f32,
    /// Alpha approached otherwise.
    pub fade_in_alpha: f32,
    /// Easing rate of the alpha.
    pub fade_speed: f32,
    /// Colour at full energy.
    pub full_colour: Rgba,
    /// Colour at the low threshold.
    pub low_colour: Rgba,
    /// Colour when empty.
    pub empty_colour: Rgba,
}

impl Default for EnergyBarConfig {
    fn default() -> Self {
        Self {
            smooth_transition: true,
            transition_speed: ENERGY_BAR_TRANSITION_SPEED,
            low_threshold: ENERGY_BAR_LOW_THRESHOLD,
            invisible_threshold: ENERGY_BAR_INVISIBLE_THRESHOLD,
            full_threshold: ENERGY_BAR_FULL_THRESHOLD,
            fade_out_alpha: ENERGY_BAR_FADE_OUT_ALPHA,
            fade_in_alpha: 1.0,
            fade_speed: ENERGY_BAR_FADE_SPEED,
            full_colour: Rgba::GREEN,
            low_colour: Rgba::RED,
            empty_colour: Rgba::GRAY,
        }
    }
}

impl EnergyBarConfig {
    /// Validates rates and fractions.
    ///
    /// # Errors
    /// Returns the first rate that is not positive or fraction outside
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("energy_bar.transition_speed", self.transition_speed)?;
        ensure_positive("energy_bar.fade_speed", self.fade_speed)?;
        ensure_unit("energy_bar.low_threshold", self.low_threshold)?;
        ensure_unit("energy_bar.invisible_threshold", self.invisible_threshold)?;
        ensure_unit("energy_bar.full_threshold", self.full_threshold)?;
        ensure_unit("energy_bar.fade_out_alpha", self.fade_out_alpha)?;
        ensure_unit("energy_bar.fade_in_alpha", self.fade_in_alpha)
    }

    /// Colour for a displayed fill.
    #[must_use]
    pub fn colour_for(&self, fill: f32) -> Rgba {
        if fill <= 0.0 {
            self.empty_colour
        } else if fill <= self.low_threshold {
            self.empty_colour
                .mix(self.low_colour, inverse_lerp(0.0, self.low_threshold, fill))
        } else {
            self.low_colour
                .mix(self.full_colour, inverse_lerp(self.low_threshold, 1.0, fill))
        }
    }
}

/// Displayed state of the energy bar.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EnergyBarPresenter {
    fill: f32,
    alpha: f32,
    colour: Rgba,
}

impl Default for EnergyBarPresenter {
    fn default() -> Self {
        Self {
            fill: 1.0,
            alpha: 1.0,
            colour: Rgba::GREEN,
        }
    }
}

impl EnergyBarPresenter {
    /// Moves the bar towards `energy_fraction`.
    pub fn update(&mut self, config: &EnergyBarConfig, energy_fraction: f32, delta: f32) {
        let delta = sanitize_delta(delta);
        let target = clamp01(energy_fraction);

        self.fill = if config.smooth_transition {
            lerp(self.fill, target, config.transition_speed * delta)
        } else {
            target
        };
        self.colour = config.colour_for(self.fill);

        if target <= config.invisible_threshold {
            self.alpha = 0.0;
            return;
        }
        let target_alpha = if target >= config.full_threshold {
            config.fade_out_alpha
        } else {
            config.fade_in_alpha
        };
        self.alpha = lerp(self.alpha, target_alpha, config.fade_speed * delta);
    }

    /// Displayed fill in `[0, 1]`.
    #[must_use]
    pub const fn fill(&self) -> f32 {
        self.fill
    }

    /// Fill of each half of the centred bar.
    #[must_use]
    pub fn half_fill(&self) -> f32 {
        self.fill * 0.5
    }

    /// Current bar alpha.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Current fill colour.
    #[must_use]
    pub const fn colour(&self) -> Rgba {
        self.colour
    }
}

/// Feeds the player's energy into the bar.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn energy_bar_system(
    time: Res<Time>,
    config: Res<EnergyBarConfig>,
    players: Query<&StaminaModel, With<Player>>,
    mut bar: ResMut<EnergyBarPresenter>,
) {
    let Ok(stamina) = players.single() else {
        return;
    };
    bar.update(&config, stamina.energy_fraction(), time.delta_secs());
}
