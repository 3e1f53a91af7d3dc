//! Bevy plugin wiring gameplay systems into the schedule.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{error, info};
use thiserror::Error;

use crate::audio::AudioOutbox;
use crate::config::GameConfig;
use crate::ghost::{
    fling_ghost, ghost_tick_system, release_nearest_on_remove, stagger_recovery_system,
    NearestGhostRegistry,
};
use crate::interaction::{contact_system, pickup_system, weapon_system};
use crate::navigation::{nav_agent_motion_system, NavArea};
use crate::outcome::{game_in_progress, GameOutcome, LevelProgress};
use crate::player::{
    player_movement_system, player_stamina_system, PlayerActions, PlayerInput,
};
use crate::rng::GameRng;
use crate::spawner::spawn_level_monsters_system;

/// Context carried by [`HauntSetupError`] events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HauntSetupErrorContext {
    /// The supplied configuration failed validation.
    Config,
    /// The level has no walkable ground for ghosts to navigate.
    Navigation,
}

/// Event raised when the game cannot be set up as configured.
///
/// Observers log these events so diagnostics stay visible without a Bevy
/// log plugin.
#[derive(Event, Debug, Clone, Error)]
#[error("{context:?}: {detail}")]
pub struct HauntSetupError {
    /// What failed.
    pub context: HauntSetupErrorContext,
    /// Description of the underlying error.
    pub detail: String,
}

impl HauntSetupError {
    /// Convenience constructor used by the plugin and its startup checks.
    pub fn new(context: HauntSetupErrorContext, detail: impl Into<String>) -> Self {
        Self {
            context,
            detail: detail.into(),
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn log_setup_error(event: On<HauntSetupError>) {
    let HauntSetupError { context, detail } = event.event();
    error!("setup error during {context:?}: {detail}");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn check_navigation(mut commands: Commands, navigation: Res<NavArea>) {
    if navigation.regions().is_empty() {
        commands.trigger(HauntSetupError::new(
            HauntSetupErrorContext::Navigation,
            "no walkable regions; ghosts will stay where they spawn",
        ));
    }
}

/// Bevy plugin installing the gameplay resources, observers and systems.
///
/// Gameplay systems run chained in `Update` while the attempt is in
/// progress: player stamina and movement, pickups and the weapon, stagger
/// recovery, the ghost tick, agent motion and finally contact checks.
#[derive(Debug, Clone, Default)]
pub struct HauntPlugin {
    config: GameConfig,
}

impl HauntPlugin {
    /// Creates the plugin from a configuration, validated on build.
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl Plugin for HauntPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_setup_error);

        if let Err(e) = self.config.validate() {
            app.world_mut().trigger(HauntSetupError::new(
                HauntSetupErrorContext::Config,
                e.to_string(),
            ));
            return;
        }

        let config = &self.config;
        app.insert_resource(config.ghost.clone())
            .insert_resource(config.recovery.clone())
            .insert_resource(config.stamina.clone())
            .insert_resource(config.player.clone())
            .insert_resource(config.interaction.clone())
            .insert_resource(config.spawner.clone())
            .insert_resource(LevelProgress::new(config.spawner.level))
            .insert_resource(GameRng::new(config.rng_seed))
            .init_resource::<GameOutcome>()
            .init_resource::<NearestGhostRegistry>()
            .init_resource::<AudioOutbox>()
            .init_resource::<NavArea>()
            .init_resource::<PlayerInput>()
            .init_resource::<PlayerActions>();

        app.add_observer(release_nearest_on_remove);
        app.add_observer(fling_ghost);

        app.add_systems(PostStartup, (check_navigation, spawn_level_monsters_system));
        app.add_systems(
            Update,
            (
                player_stamina_system,
                player_movement_system,
                pickup_system,
                weapon_system,
                stagger_recovery_system,
                ghost_tick_system,
                nav_agent_motion_system,
                contact_system,
            )
                .chain()
                .run_if(game_in_progress),
        );
        info!("haunt plugin installed for level {}", config.spawner.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ghost::GhostConfig;
    use rstest::rstest;

    #[derive(Resource, Default, Debug)]
    struct CapturedErrors(Vec<HauntSetupErrorContext>);

    #[expect(
        clippy::needless_pass_by_value,
        reason = "Observer systems must take On<T> by value."
    )]
    fn record_error(event: On<HauntSetupError>, mut errors: ResMut<CapturedErrors>) {
        errors.0.push(event.event().context);
    }

    #[rstest]
    fn plugin_initialises_resources() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(HauntPlugin::default());
        assert!(app.world().contains_resource::<NearestGhostRegistry>());
        assert!(app.world().contains_resource::<GhostConfig>());
        assert!(app.world().contains_resource::<GameRng>());
        assert_eq!(*app.world().resource::<GameOutcome>(), GameOutcome::Playing);
    }

    #[rstest]
    fn invalid_config_raises_setup_error() {
        let mut config = GameConfig::default();
        config.ghost.lose_radius = 1.0;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(CapturedErrors::default());
        app.world_mut().add_observer(record_error);
        app.add_plugins(HauntPlugin::new(config));
        assert_eq!(
            app.world().resource::<CapturedErrors>().0,
            vec![HauntSetupErrorContext::Config]
        );
        assert!(!app.world().contains_resource::<NearestGhostRegistry>());
    }

    #[rstest]
    fn empty_navigation_is_reported() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(CapturedErrors::default());
        app.world_mut().add_observer(record_error);
        app.add_plugins(HauntPlugin::default());
        app.update();
        assert_eq!(
            app.world().resource::<CapturedErrors>().0,
            vec![HauntSetupErrorContext::Navigation]
        );
    }
}
