//! Session randomness.

use bevy::prelude::Resource;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random number generator shared by every gameplay system.
///
/// Seeding it makes wander paths, spawn picks and pitch variation
/// reproducible.
#[derive(Resource, Debug)]
pub struct GameRng(pub StdRng);

impl GameRng {
    /// Seeds from `seed`, or from OS entropy when `None`.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(value) => {
                info!("seeding game RNG with {value}");
                Self(StdRng::seed_from_u64(value))
            }
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(None)
    }
}
