//! Locomotion core — per-tick конвейер движения персонажа
//!
//! ECS ответственность:
//! - Timers: grounded bookkeeping + окна coyote/jump buffer
//! - Gravity: вертикальная интеграция (rising/falling multipliers, ground stick)
//! - Movement: camera-relative горизонтальное движение + facing
//! - Animation: projection параметров для внешнего animation layer
//!
//! Body-mover (коллизии) — отдельный backend, см. crate::movers.

use bevy::prelude::*;

pub mod animation;
pub mod gravity;
pub mod movement;
pub mod timers;

#[cfg(test)]
mod movement_tests;
#[cfg(test)]
mod timers_tests;

pub use animation::project_animation_params;
pub use gravity::{apply_gravity, effective_gravity};
pub use movement::{apply_horizontal_movement, sample_camera_frame, world_move_direction, yaw_toward};
pub use timers::{execute_jump_requests, jump_impulse_speed, jump_qualifies, update_ground_timers};

/// Фазы tick (порядок ИНВАРИАНТЕН, см. комментарий в LocomotionPlugin)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// Routing input events → intent
    Input,
    /// Grounded bookkeeping + jump qualification
    Timers,
    /// Вертикальная интеграция
    Gravity,
    /// Camera-relative горизонтальное движение + facing
    Movement,
    /// Body-mover backend (единственное submission за tick)
    Mover,
    /// Animation parameter projection
    Animation,
}

/// Locomotion Plugin
///
/// Регистрирует конвейер в FixedUpdate (60Hz).
///
/// Порядок выполнения (НЕ переставлять — поздние фазы зависят от
/// grounded/velocity состояния ранних фаз того же tick):
/// 1. route_input_events — intent из событий
/// 2. update_ground_timers — last_grounded_time
/// 3. execute_jump_requests — coyote + buffer → impulse, jump cancel
/// 4. apply_gravity — vertical_velocity + вертикальный displacement
/// 5. sample_camera_frame, apply_horizontal_movement — горизонталь + facing
/// 6. (Mover set — backend plugin) — submission + GroundContact
/// 7. project_animation_params — derived view того же tick
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<crate::input::InputEvent>()
            .init_resource::<crate::input::InputContext>()
            .init_resource::<crate::components::CameraFrame>();

        app.configure_sets(
            FixedUpdate,
            (
                LocomotionSet::Input,
                LocomotionSet::Timers,
                LocomotionSet::Gravity,
                LocomotionSet::Movement,
                LocomotionSet::Mover,
                LocomotionSet::Animation,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                crate::input::route_input_events.in_set(LocomotionSet::Input),
                (update_ground_timers, execute_jump_requests)
                    .chain()
                    .in_set(LocomotionSet::Timers),
                apply_gravity.in_set(LocomotionSet::Gravity),
                (sample_camera_frame, apply_horizontal_movement)
                    .chain()
                    .in_set(LocomotionSet::Movement),
                project_animation_params.in_set(LocomotionSet::Animation),
            ),
        );
    }
}
