//! Headless mover: бесконечный плоский пол
//!
//! Используется когда Rapier не подключен (headless симуляция, тесты):
//! интегрирует displacement прямо в Transform и клампит на высоте пола.
//! Grounded отражает ЭТОТ ЖЕ submission (контракт §body-mover).

use bevy::prelude::*;

use crate::components::{GroundContact, LocomotionConfig, PendingDisplacement};
use crate::locomotion::LocomotionSet;

/// Запас на numerical error дискретного шага
const GROUND_EPSILON: f32 = 1.0e-4;

/// Высота плоского пола (world Y)
#[derive(Resource, Debug, Clone, Copy)]
pub struct GroundPlane {
    pub height: f32,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self { height: 0.0 }
    }
}

/// Применяет displacement к позиции с клампом на полу.
///
/// Возвращает (new_translation, grounded). Grounded только при
/// неположительном вертикальном движении — tick с jump impulse сразу
/// считается airborne.
pub fn resolve_plane_move(
    translation: Vec3,
    displacement: Vec3,
    plane_height: f32,
) -> (Vec3, bool) {
    let mut new_translation = translation + displacement;

    let grounded = displacement.y <= 0.0 && new_translation.y <= plane_height + GROUND_EPSILON;
    if grounded {
        new_translation.y = plane_height;
    }

    (new_translation, grounded)
}

/// Система: единственное submission за tick → Transform + GroundContact
pub fn apply_plane_displacement(
    mut query: Query<
        (&mut Transform, &mut PendingDisplacement, &mut GroundContact),
        With<LocomotionConfig>,
    >,
    plane: Res<GroundPlane>,
) {
    for (mut transform, mut pending, mut contact) in query.iter_mut() {
        let displacement = pending.0;
        pending.0 = Vec3::ZERO;

        let (new_translation, grounded) =
            resolve_plane_move(transform.translation, displacement, plane.height);
        transform.translation = new_translation;
        contact.grounded = grounded;
    }
}

/// Plugin: plane mover в Mover phase конвейера
pub struct PlaneMoverPlugin;

impl Plugin for PlaneMoverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GroundPlane>().add_systems(
            FixedUpdate,
            apply_plane_displacement.in_set(LocomotionSet::Mover),
        );
    }
}
