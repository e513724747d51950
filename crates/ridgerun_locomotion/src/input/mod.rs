//! Input routing — потребление event contract внешнего InputRouter
//!
//! Сам InputRouter (device polling, bindings, action maps) — вне core.
//! Core видит только discrete named events и применяет их к intent-полям
//! LocomotionState. Physics-поля (vertical_velocity, facing) события
//! НЕ трогают — это устраняет гонки input/physics внутри tick.

use bevy::prelude::Resource;

pub mod events;
pub mod systems;

pub use events::*;
pub use systems::*;

/// Активный input context (переключается Pause/Resume)
///
/// В Menu gameplay-события дропаются (оригинальное поведение action-map
/// switch: gameplay map выключена, пока открыто меню).
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    #[default]
    Gameplay,
    Menu,
}
