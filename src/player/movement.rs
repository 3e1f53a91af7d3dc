//! First-person movement and look.

use bevy::prelude::{Component, Quat, Vec2, Vec3};

use crate::vector_math::planar_direction;

/// Whether `input` clears the movement deadzone.
#[must_use]
pub fn is_moving(input: Vec2, deadzone: f32) -> bool {
    input.length() > deadzone
}

/// World-space displacement for one frame of movement input.
///
/// `yaw_degrees` is a clockwise heading seen from above, matching
/// [`PlayerLook::yaw`]. Vertical motion (jumping, gravity) is left to the
/// host physics.
#[must_use]
pub fn planar_displacement(input: Vec2, yaw_degrees: f32, speed: f32, delta: f32) -> Vec3 {
    planar_direction(input, -yaw_degrees.to_radians()) * speed * delta
}

/// Body yaw and camera pitch of the player, in degrees.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerLook {
    /// Heading of the body; positive turns right.
    pub yaw: f32,
    /// Camera tilt; positive looks down.
    pub pitch: f32,
}

impl PlayerLook {
    /// Applies one frame of look input.
    ///
    /// Horizontal input turns the body, vertical input tilts the camera and
    /// the tilt is clamped to `±pitch_limit`. Look input is a per-frame delta
    /// and is not scaled by time.
    pub fn apply(&mut self, look: Vec2, look_speed: f32, pitch_limit: f32) {
        self.yaw += look.x * look_speed;
        self.pitch = (self.pitch - look.y * look_speed).clamp(-pitch_limit, pitch_limit);
    }

    /// Body rotation for the player's transform.
    #[must_use]
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw.to_radians())
    }
}

/// Velocity produced by the last movement tick, read by footstep cadence.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerVelocity(pub Vec3);
