//! Animation parameter projection (derived view для animation collaborator)
//!
//! Core пишет параметры, внешний animation layer (AnimationTree, blend
//! graph — что угодно) читает. Никакого feedback обратно в locomotion.

use bevy::prelude::*;

/// Имена параметров sink contract
pub const PARAM_MOVE_SPEED: &str = "move_speed";
pub const PARAM_VERTICAL_VELOCITY: &str = "vertical_velocity";
pub const PARAM_AIRBORNE: &str = "airborne";

/// Derived animation parameters (read-only projection состояния locomotion)
///
/// Обновляется ПОСЛЕ mover phase — значения отражают физику этого же tick.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AnimationParams {
    /// 0.0 без intent, иначе effective speed (base или base * sprint)
    pub move_speed: f32,
    /// Вертикальная скорость со знаком (+ вверх)
    pub vertical_velocity: f32,
    /// Negation grounded-флага mover'а
    pub airborne: bool,
}

/// Внешний приёмник animation parameters
///
/// Порядок set_* вызовов не специфицирован; значения — физика текущего tick.
pub trait AnimationSink: Send + Sync {
    fn set_scalar(&mut self, name: &str, value: f32);
    fn set_flag(&mut self, name: &str, value: bool);
}

/// Опциональный boxed sink на персонаже
///
/// Без этого компонента projection всё равно пишет AnimationParams
/// (ECS-потребители читают компонент напрямую).
#[derive(Component)]
pub struct AnimationOutput {
    pub sink: Box<dyn AnimationSink>,
}

impl AnimationOutput {
    pub fn new(sink: impl AnimationSink + 'static) -> Self {
        Self { sink: Box::new(sink) }
    }
}
