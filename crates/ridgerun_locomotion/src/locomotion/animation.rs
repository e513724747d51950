//! Projection параметров для внешнего animation layer
//!
//! Pure projection: читает locomotion state, пишет AnimationParams и
//! (опционально) внешний sink. Никакого feedback в locomotion.

use bevy::prelude::*;

use crate::components::{
    AnimationOutput, AnimationParams, GroundContact, LocomotionConfig, LocomotionState,
    PARAM_AIRBORNE, PARAM_MOVE_SPEED, PARAM_VERTICAL_VELOCITY,
};

/// Система: AnimationParams + optional sink (последняя фаза tick)
///
/// Выполняется после mover phase — grounded и velocity отражают физику
/// этого же tick.
pub fn project_animation_params(
    mut query: Query<(
        &LocomotionState,
        &GroundContact,
        &LocomotionConfig,
        &mut AnimationParams,
        Option<&mut AnimationOutput>,
    )>,
) {
    for (state, contact, config, mut params, output) in query.iter_mut() {
        let move_speed = if state.move_intent == Vec2::ZERO {
            0.0
        } else if state.sprint_active {
            config.base_speed * config.sprint_multiplier
        } else {
            config.base_speed
        };

        params.move_speed = move_speed;
        params.vertical_velocity = state.vertical_velocity;
        params.airborne = !contact.grounded;

        if let Some(mut output) = output {
            output.sink.set_scalar(PARAM_MOVE_SPEED, params.move_speed);
            output.sink.set_scalar(PARAM_VERTICAL_VELOCITY, params.vertical_velocity);
            output.sink.set_flag(PARAM_AIRBORNE, params.airborne);
        }
    }
}
