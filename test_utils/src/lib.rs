//! Utility helpers for tests.
//!
//! Headless app builders, entity spawners and collaborator doubles shared by
//! the integration suites.

pub mod app;
pub mod errors;
pub mod fixtures;

pub use app::{
    headless_app, spawn_test_ghost, spawn_test_monster, spawn_test_pickup, spawn_test_player, tick,
    FRAME,
};
pub use errors::{install_error_observer, CapturedErrors};
pub use fixtures::{at_distance, flat_nav_area, seeded_config, seeded_rng, RecordingSink};
