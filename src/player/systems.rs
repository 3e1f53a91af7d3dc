//! Systems applying player input.

use bevy::prelude::*;

use crate::components::Player;
use crate::numeric::sanitize_delta;

use super::{
    is_moving, planar_displacement, PlayerConfig, PlayerInput, PlayerLook, PlayerVelocity,
    StaminaModel,
};

/// Ticks every player's energy pool from the current input.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn player_stamina_system(
    time: Res<Time>,
    input: Res<PlayerInput>,
    config: Res<PlayerConfig>,
    mut players: Query<&mut StaminaModel, With<Player>>,
) {
    let moving = is_moving(input.movement, config.move_deadzone);
    for mut stamina in &mut players {
        stamina.tick(time.delta_secs(), moving, input.sprint_held);
    }
}

/// Moves and turns the player.
///
/// Displacement uses the heading from before this frame's look input is
/// applied. The resulting planar velocity is recorded for footstep cadence.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn player_movement_system(
    time: Res<Time>,
    input: Res<PlayerInput>,
    config: Res<PlayerConfig>,
    mut players: Query<
        (
            &mut Transform,
            &mut PlayerLook,
            &mut PlayerVelocity,
            &StaminaModel,
        ),
        With<Player>,
    >,
) {
    let delta = sanitize_delta(time.delta_secs());
    for (mut transform, mut look, mut velocity, stamina) in &mut players {
        let speed = config.speed(stamina.is_sprinting());
        let step = planar_displacement(input.movement, look.yaw, speed, delta);
        transform.translation += step;
        velocity.0 = if delta > 0.0 { step / delta } else { Vec3::ZERO };

        look.apply(input.look, config.look_speed, config.pitch_limit_degrees);
        transform.rotation = look.body_rotation();
    }
}
