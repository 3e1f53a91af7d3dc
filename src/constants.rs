//! Default gameplay tunables.
//!
//! These values seed the `Default` implementations in [`crate::config`]. A
//! configuration file may override any of them at startup.

/// Radius around a ghost within which wander points are sampled.
pub const WANDER_RADIUS: f32 = 10.0;
/// Seconds between wander point picks.
pub const WANDER_INTERVAL: f32 = 5.0;
/// Distance at which a wandering ghost starts chasing the player.
pub const DETECTION_RADIUS: f32 = 10.0;
/// Distance beyond which a chasing ghost gives up.
pub const LOSE_RADIUS: f32 = 15.0;
/// Ghost movement speed while wandering.
pub const GHOST_WANDER_SPEED: f32 = 3.0;
/// Ghost movement speed while chasing.
pub const GHOST_CHASE_SPEED: f32 = 6.0;

/// Distance beyond which the heartbeat is silent.
pub const MAX_HEARTBEAT_DISTANCE: f32 = 15.0;
/// Seconds between beats when the ghost is on top of the player.
pub const MIN_HEARTBEAT_INTERVAL: f32 = 0.3;
/// Seconds between beats at the edge of the heartbeat range.
pub const MAX_HEARTBEAT_INTERVAL: f32 = 2.0;
/// Heartbeat volume at the edge of the range.
pub const MIN_HEARTBEAT_VOLUME: f32 = 0.1;
/// Heartbeat volume when the ghost is on top of the player.
pub const MAX_HEARTBEAT_VOLUME: f32 = 0.8;
/// Lower bound of the random heartbeat pitch band.
pub const HEARTBEAT_PITCH_MIN: f32 = 0.9;
/// Upper bound of the random heartbeat pitch band.
pub const HEARTBEAT_PITCH_MAX: f32 = 1.1;
/// Clip identifier used for the heartbeat cue.
pub const HEARTBEAT_CLIP: &str = "heartbeat";

/// Full energy pool.
pub const MAX_ENERGY: f32 = 100.0;
/// Energy consumed per second of sprinting.
pub const ENERGY_DRAIN_RATE: f32 = 25.0;
/// Ceiling of the ramping recharge rate, in energy per second.
pub const MAX_ENERGY_RECHARGE_RATE: f32 = 15.0;
/// Growth of the recharge rate per second spent recharging.
pub const ENERGY_RECHARGE_ACCEL: f32 = 10.0;
/// Energy required before a sprint may start.
pub const MIN_ENERGY_TO_SPRINT: f32 = 10.0;

/// Walking speed in world units per second.
pub const WALK_SPEED: f32 = 5.0;
/// Sprinting speed in world units per second.
pub const SPRINT_SPEED: f32 = 8.0;
/// Degrees of rotation per unit of look input.
pub const LOOK_SPEED: f32 = 0.5;
/// Absolute pitch limit in degrees.
pub const PITCH_LIMIT_DEGREES: f32 = 80.0;
/// Stick magnitude below which the player counts as standing still.
pub const MOVE_DEADZONE: f32 = 0.1;

/// Weapon uses granted by a weapon pickup.
pub const WEAPON_USES: u32 = 20;
/// Reach of a weapon swing.
pub const WEAPON_RANGE: f32 = 8.0;
/// Distance at which the player collects a pickup.
pub const PICKUP_RADIUS: f32 = 1.0;
/// Distance at which a monster touches the player.
pub const CONTACT_RADIUS: f32 = 1.0;

/// Seconds a flung ghost stays out of control.
pub const RECOVERY_DELAY: f32 = 5.0;
/// Search radius used to snap a recovered ghost back onto walkable ground.
pub const RECOVERY_SNAP_RANGE: f32 = 100.0;

/// Height of a monster's prompt text above its origin.
pub const PROMPT_HEIGHT_OFFSET: f32 = 2.0;

// Energy bar presentation.
/// Rate at which the displayed fill chases the stamina fraction.
pub const ENERGY_BAR_TRANSITION_SPEED: f32 = 5.0;
/// Fill fraction at or below which the bar blends towards the empty colour.
pub const ENERGY_BAR_LOW_THRESHOLD: f32 = 0.3;
/// Stamina fraction at or below which the bar is hidden outright.
pub const ENERGY_BAR_INVISIBLE_THRESHOLD: f32 = 0.02;
/// Stamina fraction at or above which the bar fades out.
pub const ENERGY_BAR_FULL_THRESHOLD: f32 = 0.99;
/// Alpha the bar settles at while full.
pub const ENERGY_BAR_FADE_OUT_ALPHA: f32 = 0.001;
/// Rate at which the bar alpha approaches its target.
pub const ENERGY_BAR_FADE_SPEED: f32 = 2.0;

// Footsteps.
/// Horizontal speed matching one step per base interval.
pub const FOOTSTEP_REFERENCE_SPEED: f32 = 5.0;
/// Accumulated progress needed for a step.
pub const FOOTSTEP_BASE_INTERVAL: f32 = 0.4;
/// Horizontal speed below which no steps are taken.
pub const FOOTSTEP_MIN_SPEED: f32 = 0.2;
/// Multiplier applied to the speed factor.
pub const FOOTSTEP_RATE_MULTIPLIER: f32 = 1.3;
/// Lowest step pitch.
pub const FOOTSTEP_PITCH_MIN: f32 = 0.9;
/// Highest step pitch.
pub const FOOTSTEP_PITCH_MAX: f32 = 1.15;
/// Progress lost per idle second.
pub const FOOTSTEP_DECAY_RATE: f32 = 0.25;
/// Clip name for step cues.
pub const FOOTSTEP_CLIP: &str = "footstep";

// Tutorial text.
/// Seconds spent fading a message in or out.
pub const TUTORIAL_FADE_DURATION: f32 = 1.0;
/// Seconds a message stays fully visible.
pub const TUTORIAL_DISPLAY_DURATION: f32 = 2.0;
