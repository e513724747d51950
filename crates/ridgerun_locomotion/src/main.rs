//! Headless прогон locomotion core
//!
//! Запускает Bevy App без рендера: скриптованный input (walk → sprint →
//! jump) и печать позиции персонажа по ходу симуляции.

use bevy::prelude::*;
use ridgerun_locomotion::{
    create_headless_app, InputEvent, LocomotionCamera, LocomotionConfig, LocomotionState,
    DEFAULT_TICK_HZ,
};

fn main() {
    println!("Starting RIDGERUN headless locomotion run ({} Hz)", DEFAULT_TICK_HZ);

    let mut app = create_headless_app(DEFAULT_TICK_HZ);

    let character = app
        .world_mut()
        .spawn((LocomotionConfig::default(), Transform::from_xyz(0.0, 0.0, 0.0)))
        .id();
    app.world_mut()
        .spawn((LocomotionCamera, Transform::from_xyz(0.0, 3.0, 8.0)));

    // Скрипт: tick → событие
    let script: &[(u64, InputEvent)] = &[
        (10, InputEvent::MoveChanged(Vec2::new(0.0, 1.0))), // вперёд
        (120, InputEvent::SprintPressed),
        (240, InputEvent::JumpPressed),
        (250, InputEvent::JumpReleased), // короткий прыжок
        (300, InputEvent::SprintReleased),
        (420, InputEvent::MoveChanged(Vec2::ZERO)),
    ];

    for tick in 0..600u64 {
        for (at, event) in script {
            if *at == tick {
                app.world_mut().resource_mut::<Events<InputEvent>>().send(*event);
            }
        }

        app.update();

        if tick % 60 == 0 {
            let world = app.world_mut();
            let transform = world.get::<Transform>(character).unwrap();
            let state = world.get::<LocomotionState>(character).unwrap();
            println!(
                "Tick {:>4}: pos ({:6.2}, {:5.2}, {:6.2})  v_y {:6.2}",
                tick,
                transform.translation.x,
                transform.translation.y,
                transform.translation.z,
                state.vertical_velocity
            );
        }
    }

    println!("Run complete");
}
