//! Win and loss state of the session.

use bevy::prelude::{Res, Resource};
use log::info;

/// How the current attempt ended, if it has.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameOutcome {
    /// Still in progress.
    #[default]
    Playing,
    /// The player touched a dangerous monster, met a friendly one without
    /// candy, or struck a friendly one.
    Died,
    /// The player brought candy to the friendly monster.
    Won,
}

impl GameOutcome {
    /// Records the end of the attempt.
    ///
    /// Only the first outcome counts; later calls are ignored. Returns
    /// whether this call settled the attempt.
    pub fn settle(&mut self, outcome: Self) -> bool {
        if *self != Self::Playing || outcome == Self::Playing {
            return false;
        }
        info!("game over: {outcome:?}");
        *self = outcome;
        true
    }

    /// Returns to [`GameOutcome::Playing`].
    pub const fn restart(&mut self) {
        *self = Self::Playing;
    }

    /// Whether the attempt is still running.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Run condition holding gameplay systems while an attempt is in progress.
///
/// An app without a [`GameOutcome`] counts as in progress.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
#[must_use]
pub fn game_in_progress(outcome: Option<Res<GameOutcome>>) -> bool {
    outcome.is_none_or(|current| current.is_playing())
}

/// Level the session is on, starting at 1.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    level: u32,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new(1)
    }
}

impl LevelProgress {
    /// Starts at `level`.
    #[must_use]
    pub const fn new(level: u32) -> Self {
        Self { level }
    }

    /// Current level.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Moves to the next level and returns it.
    pub fn advance(&mut self) -> u32 {
        self.level = self.level.saturating_add(1);
        info!("advancing to level {}", self.level);
        self.level
    }
}
