//! Discrete input events (контракт внешнего InputRouter)

use bevy::prelude::*;

/// Named input event — не чаще одного на device transition
///
/// # Delivery
/// - Emit: host-слой (device decoding) — вне core
/// - Consume: route_input_events (FixedUpdate, первая фаза tick)
///
/// Handlers idempotent-safe: дубликат события лишь перезаписывает
/// тот же intent (timestamps/флаги), ничего не ломая.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Move input изменился (device range [-1,1] per axis, Vec2::ZERO = отпущено)
    ///
    /// `y`: +1 = вперёд (от камеры), `x`: +1 = strafe вправо.
    MoveChanged(Vec2),
    /// Jump нажат
    JumpPressed,
    /// Jump отпущен (до апекса → короткий прыжок)
    JumpReleased,
    /// Sprint нажат
    SprintPressed,
    /// Sprint отпущен
    SprintReleased,
    /// Открыть меню (gameplay events дальше дропаются)
    Pause,
    /// Вернуться в gameplay
    Resume,
}
