//! Базовые компоненты персонажа: tunables + per-tick состояние
//!
//! Архитектура: Required Components (Bevy 0.16)
//! - LocomotionConfig требует весь остальной набор компонентов автоматически,
//!   поэтому spawn персонажа = один insert.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::animation::AnimationParams;

/// Вертикальная скорость "прилипания" к земле (m/s)
///
/// Когда mover сообщает grounded и velocity <= 0, вертикальная скорость
/// снапится к этой константе вместо бесконечного накопления гравитации.
/// Убирает float drift (персонаж "висит" чуть выше пола из-за discrete step).
pub const GROUND_STICK_VELOCITY: f32 = -2.0;

/// Sentinel для timestamps: "никогда не происходило"
///
/// `now - NEG_INFINITY == INFINITY` — ни одно окно (coyote, jump buffer)
/// никогда не пройдёт проверку. Используется и как init, и как сброс
/// jump request после срабатывания (гарантия at-most-once).
pub const TIME_NEVER: f32 = f32::NEG_INFINITY;

/// Tunables персонажа (immutable после spawn)
///
/// Заполняется при spawn и дальше только читается системами.
/// Serde derive — для загрузки tuning-пресетов из файла.
///
/// Инвариант: speed/gravity magnitude/окна времени положительны там, где это
/// физически требуется; `gravity` хранится со знаком (отрицательная = вниз).
/// Выход за диапазон — programming error вызывающей стороны, не runtime fault.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[require(LocomotionState, GroundContact, PendingDisplacement, AnimationParams, Transform)]
pub struct LocomotionConfig {
    /// Базовая скорость ходьбы (m/s)
    pub base_speed: f32,
    /// Множитель скорости при sprint
    pub sprint_multiplier: f32,
    /// Slerp-фактор поворота facing за tick (0..1)
    pub rotation_smoothing: f32,
    /// Величина jump impulse (подобрана под высоту прыжка при данной gravity)
    pub jump_impulse: f32,
    /// Гравитация (m/s², отрицательная = вниз)
    pub gravity: f32,
    /// Общий множитель гравитации (feel tuning)
    pub gravity_multiplier: f32,
    /// Дополнительный множитель в фазе падения (velocity <= 0)
    ///
    /// > 1.0 — падение "резче" подъёма, убирает floaty ощущение.
    pub fall_multiplier: f32,
    /// Окно jump buffering (сек): прыжок, нажатый чуть раньше приземления,
    /// всё равно сработает при касании земли
    pub jump_buffer_window: f32,
    /// Окно coyote time (сек): прыжок разрешён если земля была "недавно",
    /// даже если персонаж уже в воздухе
    pub coyote_time: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            sprint_multiplier: 1.5,
            rotation_smoothing: 0.3,
            jump_impulse: 8.0,
            gravity: -9.81,
            gravity_multiplier: 2.0,
            fall_multiplier: 1.5,
            jump_buffer_window: 0.2,
            coyote_time: 0.15,
        }
    }
}

/// Per-tick состояние locomotion (владеет только locomotion core)
///
/// Разделение полей по писателям (важно для отсутствия гонок input/physics):
/// - intent-поля (`move_intent`, `sprint_active`, `jump_cancel_pending`,
///   `last_jump_request_time`) пишет ТОЛЬКО input routing
/// - physics-поля (`vertical_velocity`, `facing`, `last_grounded_time`)
///   пишут ТОЛЬКО tick-системы
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct LocomotionState {
    /// Последний полученный move input (device range [-1,1] per axis)
    ///
    /// Zero vector == "нет input". Tick читает, никогда не пишет.
    pub move_intent: Vec2,
    /// true между sprint-pressed и sprint-released
    pub sprint_active: bool,
    /// Отложенный jump-cancel (обрабатывается в фазе прыжка этого tick)
    pub jump_cancel_pending: bool,
    /// Вертикальная скорость (signed: + вверх, - вниз), живёт между ticks
    pub vertical_velocity: f32,
    /// Simulation time последнего grounded tick (для coyote window)
    pub last_grounded_time: f32,
    /// Simulation time последнего jump request (для buffer window)
    ///
    /// Сбрасывается в TIME_NEVER после срабатывания прыжка — один request
    /// не может выстрелить дважды.
    pub last_jump_request_time: f32,
    /// Facing персонажа (yaw-only). Сохраняется при отсутствии input.
    pub facing: Quat,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            move_intent: Vec2::ZERO,
            sprint_active: false,
            jump_cancel_pending: false,
            vertical_velocity: 0.0,
            last_grounded_time: TIME_NEVER,
            last_jump_request_time: TIME_NEVER,
            facing: Quat::IDENTITY,
        }
    }
}

/// Отчёт body-mover о контакте с землёй
///
/// Пишет mover backend после применения displacement, читают timers/gravity
/// системы. Для plane mover отражает тот же tick; для rapier — результат
/// последнего physics step.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct GroundContact {
    pub grounded: bool,
}

/// Аккумулятор displacement текущего tick (world units, уже * dt)
///
/// Gravity и movement системы добавляют свои компоненты, mover backend
/// потребляет ОДНИМ submission и обнуляет. Инвариант: ровно одно
/// submission за tick.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PendingDisplacement(pub Vec3);
