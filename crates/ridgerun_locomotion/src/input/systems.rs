//! Применение input events к intent-полям LocomotionState
//!
//! # Архитектура
//! - Читает: InputEvent (от host-слоя)
//! - Пишет: ТОЛЬКО intent-поля (move_intent, sprint_active,
//!   jump_cancel_pending, last_jump_request_time) + InputContext
//! - НЕ пишет: vertical_velocity, facing (physics-поля — только tick-системы)
//!
//! Событие без активного персонажа — no-op (движение не имеет
//! user-visible failure states, только degraded/idle motion).

use bevy::prelude::*;

use super::events::InputEvent;
use super::InputContext;
use crate::components::LocomotionState;
use crate::logger;

/// Первая фаза tick: routing событий в intent
///
/// Pause/Resume переключают InputContext всегда; остальные события
/// применяются только в Gameplay context.
pub fn route_input_events(
    mut events: EventReader<InputEvent>,
    mut context: ResMut<InputContext>,
    mut query: Query<&mut LocomotionState>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for event in events.read() {
        match event {
            InputEvent::Pause => {
                if *context != InputContext::Menu {
                    *context = InputContext::Menu;
                    logger::log("Input context → Menu");
                }
                continue;
            }
            InputEvent::Resume => {
                if *context != InputContext::Gameplay {
                    *context = InputContext::Gameplay;
                    logger::log("Input context → Gameplay");
                }
                continue;
            }
            _ => {}
        }

        // Gameplay map выключена пока открыто меню
        if *context == InputContext::Menu {
            continue;
        }

        for mut state in query.iter_mut() {
            apply_gameplay_event(&mut state, *event, now);
        }
    }
}

/// Применяет одно gameplay-событие к intent-полям.
///
/// Вынесено из системы для прямого unit-тестирования (без App schedule).
pub fn apply_gameplay_event(state: &mut LocomotionState, event: InputEvent, now: f32) {
    match event {
        InputEvent::MoveChanged(dir) => state.move_intent = dir,
        InputEvent::JumpPressed => state.last_jump_request_time = now,
        InputEvent::JumpReleased => state.jump_cancel_pending = true,
        InputEvent::SprintPressed => state.sprint_active = true,
        InputEvent::SprintReleased => state.sprint_active = false,
        // Pause/Resume обработаны до этого вызова
        InputEvent::Pause | InputEvent::Resume => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TIME_NEVER;

    #[test]
    fn test_move_changed_overwrites_intent() {
        let mut state = LocomotionState::default();

        apply_gameplay_event(&mut state, InputEvent::MoveChanged(Vec2::new(0.0, 1.0)), 0.5);
        assert_eq!(state.move_intent, Vec2::new(0.0, 1.0));

        // Дубликат/перезапись — idempotent-safe
        apply_gameplay_event(&mut state, InputEvent::MoveChanged(Vec2::ZERO), 0.6);
        assert_eq!(state.move_intent, Vec2::ZERO);
    }

    #[test]
    fn test_jump_pressed_stamps_request_time() {
        let mut state = LocomotionState::default();
        assert_eq!(state.last_jump_request_time, TIME_NEVER);

        apply_gameplay_event(&mut state, InputEvent::JumpPressed, 2.0);
        assert_eq!(state.last_jump_request_time, 2.0);
    }

    #[test]
    fn test_sprint_toggle() {
        let mut state = LocomotionState::default();

        apply_gameplay_event(&mut state, InputEvent::SprintPressed, 0.0);
        assert!(state.sprint_active);

        // Дубликат pressed не ломает состояние
        apply_gameplay_event(&mut state, InputEvent::SprintPressed, 0.1);
        assert!(state.sprint_active);

        apply_gameplay_event(&mut state, InputEvent::SprintReleased, 0.2);
        assert!(!state.sprint_active);
    }

    #[test]
    fn test_events_do_not_touch_physics_fields() {
        let mut state = LocomotionState::default();
        state.vertical_velocity = 3.5;
        let facing = state.facing;

        apply_gameplay_event(&mut state, InputEvent::MoveChanged(Vec2::X), 0.0);
        apply_gameplay_event(&mut state, InputEvent::JumpPressed, 0.0);
        apply_gameplay_event(&mut state, InputEvent::JumpReleased, 0.0);
        apply_gameplay_event(&mut state, InputEvent::SprintPressed, 0.0);

        assert_eq!(state.vertical_velocity, 3.5);
        assert_eq!(state.facing, facing);
        assert!(state.jump_cancel_pending); // cancel отложен, не применён
    }
}
