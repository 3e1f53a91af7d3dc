#![cfg_attr(docsrs, feature(doc_cfg))]
//! Gameplay logic for a small first-person ghost hunt, hosted on Bevy.
//!
//! Ghosts wander between reachable points and chase the player once close
//! enough; the nearest one drives a heartbeat cue. The player sprints on a
//! limited energy pool, collects candy and a weapon, and wins by bringing
//! candy to the friendly monster. Rendering, physics and audio playback stay
//! with the host, which talks to this crate through resources and the
//! [`navigation`] and [`audio`] traits.
pub mod audio;
pub mod components;
pub mod config;
pub mod constants;
pub mod ghost;
pub mod interaction;
pub mod logging;
pub mod navigation;
pub mod numeric;
pub mod outcome;
pub mod player;
pub mod plugin;
pub mod presentation;
pub mod rng;
pub mod spawn_world;
pub mod spawner;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use audio::{AudioOutbox, CueSink, CueSource, SoundCue};
pub use components::{Monster, MonsterTemper, Pickup, PickupKind, Player, Prompt};
pub use config::{ConfigError, GameConfig};
pub use ghost::{
    FlingGhost, Ghost, GhostConfig, GhostId, GhostMode, NearestGhostRegistry, Stagger,
};
pub use logging::init as init_logging;
pub use navigation::{NavAgent, NavArea, Navigation, Steering, WalkableRegion};
pub use outcome::{GameOutcome, LevelProgress};
pub use player::{Inventory, PlayerActions, PlayerInput, StaminaModel};
pub use plugin::{HauntPlugin, HauntSetupError, HauntSetupErrorContext};
pub use presentation::PresentationPlugin;
pub use rng::GameRng;
pub use spawn_world::spawn_demo_world;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use haunt::prelude::*;
    //! ```

    pub use crate::GameConfig;
    pub use crate::GameOutcome;
    pub use crate::Ghost;
    pub use crate::GhostMode;
    pub use crate::HauntPlugin;
    pub use crate::NearestGhostRegistry;
    pub use crate::PlayerInput;
    pub use crate::PresentationPlugin;
    pub use crate::StaminaModel;
}
