//! Camera-relative горизонтальное движение + facing
//!
//! Intent (input space) → world space через горизонтальный frame камеры,
//! facing плавно доворачивается к heading движения. Без intent — no-op:
//! персонаж держит позицию и последний facing (вертикальная интеграция
//! при этом работает независимо).

use bevy::prelude::*;

use crate::components::{
    CameraFrame, LocomotionCamera, LocomotionConfig, LocomotionState, PendingDisplacement,
};

/// Мировое направление движения из intent и camera frame (НЕ normalized)
///
/// forward * intent.y + strafe right * intent.x. Frame уже горизонтальный
/// (pitch камеры спроецирован), поэтому y результата ~0.
pub fn world_move_direction(frame: &CameraFrame, intent: Vec2) -> Vec3 {
    frame.forward * intent.y + frame.right * intent.x
}

/// Yaw-only rotation, смотрящая вдоль горизонтального направления
///
/// Bevy convention: forward = -Z, поэтому θ = atan2(-x, -z).
pub fn yaw_toward(direction: Vec3) -> Quat {
    Quat::from_rotation_y((-direction.x).atan2(-direction.z))
}

/// Система: свежий сэмпл camera frame (каждый tick, не кэшируется)
///
/// Камера двигается независимо от симуляции — кадр прошлого tick уже
/// устарел. Вырожденная проекция (камера строго вдоль Y) сохраняет
/// предыдущий frame.
pub fn sample_camera_frame(
    camera_query: Query<&Transform, With<LocomotionCamera>>,
    mut frame: ResMut<CameraFrame>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        // Нет камеры — остаётся world-axis fallback (degraded mode)
        return;
    };

    if let Some(sampled) = CameraFrame::from_camera_transform(camera_transform) {
        *frame = sampled;
    }
}

/// Система: горизонтальный displacement + facing slerp
///
/// Zero intent — ранний выход: ни displacement, ни поворота facing
/// (независимо от sprint). Facing интерполируется slerp'ом (кратчайшая
/// дуга — без wrap-around артефактов на ±180°) и зеркалится в
/// Transform.rotation персонажа.
pub fn apply_horizontal_movement(
    mut query: Query<(
        &mut LocomotionState,
        &mut PendingDisplacement,
        &mut Transform,
        &LocomotionConfig,
    )>,
    frame: Res<CameraFrame>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut pending, mut transform, config) in query.iter_mut() {
        if state.move_intent == Vec2::ZERO {
            continue;
        }

        let direction = world_move_direction(&frame, state.move_intent);
        let Some(direction) = direction.try_normalize() else {
            // Противоположные оси intent погасили друг друга
            continue;
        };

        let target = yaw_toward(direction);
        state.facing = state.facing.slerp(target, config.rotation_smoothing);
        transform.rotation = state.facing;

        let speed = if state.sprint_active {
            config.base_speed * config.sprint_multiplier
        } else {
            config.base_speed
        };
        pending.0 += direction * speed * dt;
    }
}
