//! RIDGERUN Locomotion Core
//!
//! Per-frame locomotion ядро third-person персонажа на Bevy ECS 0.16:
//! directional/action input → физически правдоподобное движение
//! (camera-relative walk/sprint, gravity falling, jump с forgiveness
//! windows), плюс facing rotation и animation parameters.
//!
//! Коллабораторы — внешние:
//! - InputRouter (device decoding) поставляет discrete InputEvent
//! - Body-mover (movers::plane / movers::rapier) применяет displacement
//! - Animation layer потребляет AnimationParams / AnimationSink

use bevy::prelude::*;
use std::time::Duration;

pub mod components;
pub mod input;
pub mod locomotion;
pub mod logger;
pub mod movers;

// Re-export основных типов
pub use components::{
    AnimationOutput, AnimationParams, AnimationSink, CameraFrame, GroundContact, LocomotionCamera,
    LocomotionConfig, LocomotionState, PendingDisplacement, GROUND_STICK_VELOCITY, TIME_NEVER,
};
pub use input::{InputContext, InputEvent};
pub use locomotion::{LocomotionPlugin, LocomotionSet};
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter};
pub use movers::{GroundPlane, PlaneMoverPlugin, RapierMoverPlugin};

/// Simulation tick rate по умолчанию (Hz)
pub const DEFAULT_TICK_HZ: f64 = 60.0;

/// Создаёт minimal Bevy App для headless симуляции
///
/// Детерминизм: TimeUpdateStrategy::ManualDuration — каждый app.update()
/// продвигает время ровно на 1/tick_hz, т.е. ровно один FixedUpdate tick.
/// Тесты получают воспроизводимый replay без зависимости от wall clock.
///
/// Первый update() внутри только инициализирует Time (delta == 0).
pub fn create_headless_app(tick_hz: f64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(tick_hz))
        .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(1.0 / tick_hz),
        ))
        .add_plugins((LocomotionPlugin, PlaneMoverPlugin));

    // Инициализация clock: delta первого update всегда нулевой
    app.update();

    app
}

/// Snapshot состояния персонажей для сравнения детерминизма
///
/// Сортировка по Entity ID + сериализация через Debug — простейший
/// детерминированный формат для replay-тестов.
pub fn locomotion_snapshot(world: &mut World) -> Vec<u8> {
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &LocomotionState, &Transform)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    entities.sort_by_key(|(entity, _, _)| entity.index());

    for (entity, state, transform) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}{:?}", state, transform).as_bytes());
    }

    snapshot
}
