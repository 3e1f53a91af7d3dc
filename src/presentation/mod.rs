//! Presentation models fed from gameplay state.
//!
//! `PresentationPlugin` keeps the energy bar, the tutorial text and the
//! player's footstep cadence up to date. Drawing and playback belong to the
//! host: it reads [`EnergyBarPresenter`] and [`TutorialSequencer`] each frame
//! and drains step cues from [`crate::audio::AudioOutbox`]. The layer stays a
//! passive observer of simulation state and never writes back into it.

mod energy_bar;
mod footsteps;
mod tutorial;

use bevy::prelude::*;

use crate::audio::AudioOutbox;
use crate::config::GameConfig;
use crate::outcome::game_in_progress;
use crate::player::{player_movement_system, player_stamina_system};

pub use energy_bar::{energy_bar_system, EnergyBarConfig, EnergyBarPresenter, Rgba};
pub use footsteps::{footstep_system, FootstepCadence, FootstepConfig};
pub use tutorial::{tutorial_system, TutorialConfig, TutorialPhase, TutorialSequencer};

/// Plugin owning the presentation models.
///
/// # Responsibilities
///
/// - Inserts [`EnergyBarConfig`], [`FootstepConfig`] and a
///   [`TutorialSequencer`] built from [`TutorialConfig`].
/// - Eases the energy bar towards the player's stamina after the stamina
///   tick.
/// - Emits footstep cues after the player has moved.
/// - Advances the tutorial text.
///
/// Every system pauses once the attempt has ended, matching the frozen
/// clock of the end screen.
///
/// # Examples
///
/// ```ignore
/// use bevy::prelude::*;
/// use haunt::{GameConfig, HauntPlugin, PresentationPlugin};
///
/// let config = GameConfig::default();
/// App::new()
///     .add_plugins(MinimalPlugins)
///     .add_plugins(PresentationPlugin::from_config(&config))
///     .add_plugins(HauntPlugin::new(config))
///     .run();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PresentationPlugin {
    energy_bar: EnergyBarConfig,
    footsteps: FootstepConfig,
    tutorial: TutorialConfig,
}

impl PresentationPlugin {
    /// Takes the presentation sections of `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            energy_bar: config.energy_bar.clone(),
            footsteps: config.footsteps.clone(),
            tutorial: config.tutorial.clone(),
        }
    }
}

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.energy_bar.clone());
        app.insert_resource(self.footsteps.clone());
        app.insert_resource(TutorialSequencer::new(&self.tutorial));
        app.init_resource::<EnergyBarPresenter>();
        app.init_resource::<AudioOutbox>();
        app.add_systems(
            Update,
            (
                energy_bar_system.after(player_stamina_system),
                footstep_system.after(player_movement_system),
                tutorial_system,
            )
                .run_if(game_in_progress),
        );
    }
}
