//! Monster roster per level and the systems that spawn it.
//!
//! Every monster is a ghost with a temper and a prompt floating above it.
//! Friendly monsters say something reassuring; dangerous ones say a
//! misspelt version of the same thing.

use bevy::prelude::*;
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::components::{Monster, MonsterTemper, Prompt};
use crate::config::{ensure_non_negative, ConfigError};
use crate::ghost::{Ghost, GhostConfig, RecoveryConfig, Stagger};
use crate::navigation::NavAgent;
use crate::outcome::LevelProgress;
use crate::rng::GameRng;
use crate::PROMPT_HEIGHT_OFFSET;

/// One monster in a level's roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry {
    /// Temper of the monster.
    pub temper: MonsterTemper,
    /// Prompts to choose from at random.
    pub prompts: &'static [&'static str],
}

const HELLO: &[&str] = &["Hello Friend"];
const FOLLOW: &[&str] = &["Follow me"];
const FOLLOW_MISSPELT: &[&str] = &["Follo mee", "Fo low mee"];
const TRUST: &[&str] = &["Trustworthy"];
const TRUST_MISSPELT: &[&str] = &["Trustwurthy", "Trustw0rthy", "Truztworthy"];

const fn friendly(prompts: &'static [&'static str]) -> RosterEntry {
    RosterEntry {
        temper: MonsterTemper::Friendly,
        prompts,
    }
}

const fn dangerous(prompts: &'static [&'static str]) -> RosterEntry {
    RosterEntry {
        temper: MonsterTemper::Dangerous,
        prompts,
    }
}

const LEVEL_ONE: &[RosterEntry] = &[friendly(HELLO)];
const LEVEL_TWO: &[RosterEntry] = &[friendly(FOLLOW), dangerous(FOLLOW_MISSPELT)];
const LEVEL_THREE: &[RosterEntry] = &[
    friendly(TRUST),
    dangerous(TRUST_MISSPELT),
    dangerous(TRUST_MISSPELT),
    dangerous(TRUST_MISSPELT),
];

/// Monsters spawned for `level`, or `None` for an unknown level.
#[must_use]
pub const fn level_roster(level: u32) -> Option<&'static [RosterEntry]> {
    match level {
        1 => Some(LEVEL_ONE),
        2 => Some(LEVEL_TWO),
        3 => Some(LEVEL_THREE),
        _ => None,
    }
}

/// Where monsters appear and how their prompts sit.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Level spawned at startup.
    pub level: u32,
    /// Fallback spawn position when no spawn points are listed.
    pub origin: Vec3,
    /// Candidate positions; each monster picks one at random.
    pub spawn_points: Vec<Vec3>,
    /// Height of prompt text above each monster.
    pub prompt_height_offset: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            level: 1,
            origin: Vec3::ZERO,
            spawn_points: Vec::new(),
            prompt_height_offset: PROMPT_HEIGHT_OFFSET,
        }
    }
}

impl SpawnerConfig {
    /// Validates the prompt offset.
    ///
    /// # Errors
    /// Returns [`ConfigError::Negative`] for a negative or non-finite
    /// offset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("spawner.prompt_height_offset", self.prompt_height_offset)
    }

    /// Picks a spawn position, falling back to the origin.
    #[must_use]
    pub fn pick_position(&self, rng: &mut dyn RngCore) -> Vec3 {
        self.spawn_points.choose(rng).copied().unwrap_or(self.origin)
    }
}

/// A monster ready to be spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterSpawn {
    /// Temper of the monster.
    pub temper: MonsterTemper,
    /// Spawn position.
    pub position: Vec3,
    /// Prompt shown above it.
    pub prompt: String,
}

/// Resolves `level`'s roster into concrete spawns.
///
/// Unknown levels log a warning and yield nothing.
#[must_use]
pub fn plan_level(level: u32, config: &SpawnerConfig, rng: &mut dyn RngCore) -> Vec<MonsterSpawn> {
    let Some(roster) = level_roster(level) else {
        warn!("level {level} has no monster roster; nothing spawned");
        return Vec::new();
    };
    roster
        .iter()
        .map(|entry| {
            let position = config.pick_position(rng);
            let prompt = entry
                .prompts
                .choose(rng)
                .map_or_else(String::new, |text| (*text).to_owned());
            MonsterSpawn {
                temper: entry.temper,
                position,
                prompt,
            }
        })
        .collect()
}

/// Components making up a monster entity.
#[must_use]
pub fn monster_bundle(
    spawn: MonsterSpawn,
    ghost: &GhostConfig,
    recovery: &RecoveryConfig,
    prompt_height_offset: f32,
) -> impl Bundle {
    (
        Monster {
            temper: spawn.temper,
        },
        Prompt {
            text: spawn.prompt,
            height_offset: prompt_height_offset,
        },
        Ghost::new(ghost.clone()),
        NavAgent::new(ghost.wander_speed),
        Stagger::new(recovery.recovery_delay),
        Transform::from_translation(spawn.position),
    )
}

/// Spawns the roster for the current level.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn spawn_level_monsters_system(
    mut commands: Commands,
    progress: Res<LevelProgress>,
    spawner: Res<SpawnerConfig>,
    ghost: Res<GhostConfig>,
    recovery: Res<RecoveryConfig>,
    mut rng: ResMut<GameRng>,
) {
    let spawns = plan_level(progress.level(), &spawner, &mut rng.0);
    info!(
        "spawning {} monsters for level {}",
        spawns.len(),
        progress.level()
    );
    for spawn in spawns {
        commands.spawn(monster_bundle(
            spawn,
            &ghost,
            &recovery,
            spawner.prompt_height_offset,
        ));
    }
}
