//! Plain-data fixtures and collaborator doubles.

use glam::{Vec2, Vec3};
use haunt::{CueSink, GameConfig, NavArea, SoundCue, WalkableRegion};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Square walkable floor at height zero centred on the origin.
///
/// # Examples
/// ```
/// use test_utils::flat_nav_area;
/// let area = flat_nav_area(10.0);
/// assert_eq!(area.regions().len(), 1);
/// ```
pub fn flat_nav_area(half_extent: f32) -> NavArea {
    NavArea::new(vec![WalkableRegion::new(
        Vec2::splat(-half_extent),
        Vec2::splat(half_extent),
        0.0,
    )])
}

/// Deterministic RNG for unit-level tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Default configuration with a fixed seed and no monsters spawned at
/// startup, so tests place every ghost themselves.
pub fn seeded_config(seed: u64) -> GameConfig {
    let mut config = GameConfig::default();
    config.rng_seed = Some(seed);
    config.spawner.level = 0;
    config
}

/// Cue sink that keeps every cue for later inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    /// Cues in the order they were played.
    pub cues: Vec<SoundCue>,
}

impl CueSink for RecordingSink {
    fn play_one_shot(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}

/// Point `distance` units from the origin along +X, on the floor.
pub fn at_distance(distance: f32) -> Vec3 {
    Vec3::new(distance, 0.0, 0.0)
}
