//! Replay-тесты детерминизма
//!
//! Одинаковый input-скрипт при ManualDuration clock обязан давать
//! идентичные траектории (явный clock вместо hidden global — иначе
//! replay невозможен).

use bevy::prelude::*;
use ridgerun_locomotion::{
    create_headless_app, locomotion_snapshot, InputEvent, LocomotionCamera, LocomotionConfig,
};

const TICK_COUNT: u64 = 600;

/// Скриптованный прогон: walk → sprint → jump → cancel → stop
fn run_scripted(tick_hz: f64) -> Vec<u8> {
    let mut app = create_headless_app(tick_hz);

    app.world_mut()
        .spawn((LocomotionConfig::default(), Transform::from_xyz(0.0, 0.0, 0.0)));
    app.world_mut()
        .spawn((LocomotionCamera, Transform::from_xyz(0.0, 2.0, 6.0)));

    let script: &[(u64, InputEvent)] = &[
        (5, InputEvent::MoveChanged(Vec2::new(0.3, 1.0))),
        (90, InputEvent::SprintPressed),
        (180, InputEvent::JumpPressed),
        (190, InputEvent::JumpReleased),
        (260, InputEvent::SprintReleased),
        (300, InputEvent::MoveChanged(Vec2::new(-1.0, 0.0))),
        (420, InputEvent::JumpPressed),
        (500, InputEvent::MoveChanged(Vec2::ZERO)),
    ];

    for tick in 0..TICK_COUNT {
        for (at, event) in script {
            if *at == tick {
                app.world_mut().resource_mut::<Events<InputEvent>>().send(*event);
            }
        }
        app.update();
    }

    locomotion_snapshot(app.world_mut())
}

#[test]
fn test_replay_same_script_identical() {
    let snapshot1 = run_scripted(60.0);
    let snapshot2 = run_scripted(60.0);

    assert_eq!(
        snapshot1, snapshot2,
        "Одинаковый скрипт дал разные траектории!"
    );
}

#[test]
fn test_replay_multiple_runs() {
    let snapshots: Vec<_> = (0..5).map(|_| run_scripted(60.0)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}
