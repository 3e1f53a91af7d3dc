//! Behavioural tests for sprinting, energy recovery and the energy bar using
//! rust-rspec.

#[path = "support/thread_safe_app.rs"]
mod thread_safe_app;

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

#[path = "support/app_fixture.rs"]
mod app_fixture;

use std::sync::MutexGuard;

use approx::assert_relative_eq;
use bevy::prelude::*;
use haunt::presentation::EnergyBarPresenter;
use haunt::{AudioOutbox, CueSource, PlayerInput, StaminaModel};
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use test_utils::{headless_app, seeded_config, spawn_test_player};
use thread_safe_app::ThreadSafeApp;

/// Fixture with a lone player on an empty floor.
#[derive(Debug, Clone)]
struct StaminaFixture {
    base: app_fixture::AppFixtureBase,
    player: Entity,
}

impl StaminaFixture {
    fn bootstrap() -> Self {
        let mut app = headless_app(seeded_config(3));
        let player = spawn_test_player(&mut app, Vec3::ZERO);
        Self {
            base: app_fixture::AppFixtureBase::new(app),
            player,
        }
    }

    fn app_guard(&self) -> MutexGuard<'_, ThreadSafeApp> {
        self.base.app_guard()
    }

    fn tick(&self, frames: usize) {
        self.base.tick(frames);
    }

    fn set_input(&self, movement: Vec2, sprint_held: bool) {
        let mut app = self.app_guard();
        let mut input = app.world_mut().resource_mut::<PlayerInput>();
        input.movement = movement;
        input.sprint_held = sprint_held;
    }

    fn stamina(&self) -> StaminaModel {
        self.app_guard()
            .world()
            .get::<StaminaModel>(self.player)
            .cloned()
            .unwrap_or_else(|| panic!("player has no stamina"))
    }

    fn position(&self) -> Vec3 {
        self.app_guard()
            .world()
            .get::<Transform>(self.player)
            .map_or(Vec3::NAN, |transform| transform.translation)
    }

    fn bar_fill(&self) -> f32 {
        self.app_guard()
            .world()
            .resource::<EnergyBarPresenter>()
            .fill()
    }

    fn footsteps(&self) -> usize {
        self.app_guard()
            .world()
            .resource::<AudioOutbox>()
            .iter()
            .filter(|cue| cue.source == CueSource::Footstep)
            .count()
    }
}

#[test]
fn sprinting_drains_and_resting_recovers() {
    let fixture = StaminaFixture::bootstrap();

    run_serial(&rspec::given(
        "a rested player",
        fixture,
        |scenario: &mut Scenario<StaminaFixture>| {
            scenario.when("the player sprints forward for one second", |ctx| {
                ctx.before_all(|state| {
                    state.set_input(Vec2::Y, true);
                    state.tick(10);
                });

                ctx.then("a quarter of the energy is spent", |state| {
                    let stamina = state.stamina();
                    assert!(stamina.is_sprinting());
                    assert_relative_eq!(stamina.current(), 75.0, epsilon = 1e-3);
                });

                ctx.then("the player covered sprint distance", |state| {
                    assert_relative_eq!(state.position().length(), 8.0, epsilon = 1e-3);
                });

                ctx.then("the energy bar follows the pool down", |state| {
                    let fill = state.bar_fill();
                    assert!(fill < 1.0 && fill > 0.75, "unexpected fill {fill}");
                });

                ctx.then("footsteps were heard", |state| {
                    assert!(state.footsteps() >= 1, "expected footstep cues");
                });
            });

            scenario.when("the player lets go of sprint and rests", |ctx| {
                ctx.before_all(|state| {
                    state.set_input(Vec2::ZERO, false);
                    state.tick(10);
                });

                ctx.then("energy starts to recover", |state| {
                    let stamina = state.stamina();
                    assert!(!stamina.is_sprinting());
                    assert!(stamina.current() > 75.0);
                    assert!(stamina.recharge_rate() > 0.0);
                });
            });
        },
    ));
}

#[test]
fn exhausted_player_cannot_sprint() {
    let fixture = StaminaFixture::bootstrap();

    run_serial(&rspec::given(
        "a player holding sprint",
        fixture,
        |scenario: &mut Scenario<StaminaFixture>| {
            scenario.when("the pool runs dry", |ctx| {
                ctx.before_all(|state| {
                    state.set_input(Vec2::Y, true);
                    state.tick(45);
                });

                ctx.then("sprinting has stopped below the threshold", |state| {
                    let stamina = state.stamina();
                    assert!(!stamina.is_sprinting());
                    assert!(stamina.current() < stamina.config().min_energy_to_sprint);
                });
            });
        },
    ));
}
