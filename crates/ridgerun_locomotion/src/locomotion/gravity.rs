//! Вертикальная интеграция под гравитацией
//!
//! Асимметрия: в фазе падения (velocity <= 0) гравитация умножается на
//! fall_multiplier — падение резче подъёма (feel tuning). На земле
//! отрицательная скорость снапится к ground-stick константе.

use bevy::prelude::*;

use crate::components::{
    GroundContact, LocomotionConfig, LocomotionState, PendingDisplacement, GROUND_STICK_VELOCITY,
};

/// Эффективная гравитация этого tick (m/s², отрицательная)
pub fn effective_gravity(config: &LocomotionConfig, vertical_velocity: f32) -> f32 {
    let is_falling = vertical_velocity <= 0.0;
    let fall_boost = if is_falling { config.fall_multiplier } else { 1.0 };
    config.gravity * config.gravity_multiplier * fall_boost
}

/// Система: интеграция vertical_velocity + вертикальный displacement
///
/// Grounded с отрицательной скоростью → snap к GROUND_STICK_VELOCITY,
/// ноль вертикального displacement, интеграция пропускается. Иначе
/// v += g_eff * dt; displacement += v * dt (вверх по Y).
pub fn apply_gravity(
    mut query: Query<(
        &mut LocomotionState,
        &mut PendingDisplacement,
        &GroundContact,
        &LocomotionConfig,
    )>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut pending, contact, config) in query.iter_mut() {
        if contact.grounded && state.vertical_velocity < 0.0 {
            state.vertical_velocity = GROUND_STICK_VELOCITY;
            continue;
        }

        let g = effective_gravity(config, state.vertical_velocity);
        state.vertical_velocity += g * dt;
        pending.0.y += state.vertical_velocity * dt;
    }
}
