//! Ground-contact bookkeeping и исполнение прыжка
//!
//! Это не state machine — непрерывная policy, оцениваемая каждый tick:
//! grounded → обновить last_grounded_time; затем единая проверка
//! qualification покрывает и прыжок по нажатию (coyote-eligible), и
//! buffered прыжок при приземлении.

use bevy::prelude::*;

use crate::components::{GroundContact, LocomotionConfig, LocomotionState, TIME_NEVER};

/// Прыжок qualified: земля была недавно (coyote) И request свежий (buffer)
pub fn jump_qualifies(
    now: f32,
    last_grounded_time: f32,
    last_jump_request_time: f32,
    coyote_time: f32,
    jump_buffer_window: f32,
) -> bool {
    now - last_grounded_time <= coyote_time && now - last_jump_request_time <= jump_buffer_window
}

/// Скорость impulse: v = sqrt(jump_impulse * -2 * gravity)
///
/// gravity отрицательная, поэтому подкоренное положительно. Величина
/// подобрана так, что персонаж достигает сконфигурированной высоты прыжка
/// при данной gravity.
pub fn jump_impulse_speed(jump_impulse: f32, gravity: f32) -> f32 {
    (jump_impulse * -2.0 * gravity).sqrt()
}

/// Система: grounded bookkeeping (фаза 1 tick)
pub fn update_ground_timers(
    mut query: Query<(&mut LocomotionState, &GroundContact)>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for (mut state, contact) in query.iter_mut() {
        if contact.grounded {
            state.last_grounded_time = now;
        }
    }
}

/// Система: исполнение jump request + jump cancel
///
/// Qualification проверяется каждый tick (не только при нажатии):
/// - нажатие на земле / в coyote window → impulse в этот же tick
/// - нажатие в воздухе → request буферизован; приземление внутри buffer
///   window обновит last_grounded_time, и прыжок выстрелит при касании
///
/// После impulse request сбрасывается в TIME_NEVER — тот же request
/// не может выстрелить повторно.
///
/// Cancel (отпускание до апекса) применяется ПОСЛЕ qualification: tap
/// (press+release в один tick) даёт короткий прыжок, а не отмену.
pub fn execute_jump_requests(
    mut query: Query<(&mut LocomotionState, &LocomotionConfig)>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for (mut state, config) in query.iter_mut() {
        if jump_qualifies(
            now,
            state.last_grounded_time,
            state.last_jump_request_time,
            config.coyote_time,
            config.jump_buffer_window,
        ) {
            state.vertical_velocity = jump_impulse_speed(config.jump_impulse, config.gravity);
            state.last_jump_request_time = TIME_NEVER;
        }

        // Variable jump height: отпускание до апекса режет скорость вдвое
        if state.jump_cancel_pending {
            if state.vertical_velocity > 0.0 {
                state.vertical_velocity *= 0.5;
            }
            state.jump_cancel_pending = false;
        }
    }
}
