//! Rapier backend: rigid-capsule mover с реальными коллизиями
//!
//! Архитектура:
//! - RigidBody::KinematicPositionBased + capsule collider
//! - Displacement уходит в KinematicCharacterController.translation,
//!   Rapier резолвит коллизии (slide/snap) в свой physics step
//! - Grounded читается из KinematicCharacterControllerOutput
//!
//! Host обязан добавить RapierPhysicsPlugin сам (здесь только мост
//! locomotion ↔ character controller).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{GroundContact, LocomotionConfig, PendingDisplacement};
use crate::locomotion::LocomotionSet;

/// Система: submission displacement в character controller
pub fn submit_rapier_displacement(
    mut query: Query<(&mut KinematicCharacterController, &mut PendingDisplacement)>,
) {
    for (mut controller, mut pending) in query.iter_mut() {
        controller.translation = Some(pending.0);
        pending.0 = Vec3::ZERO;
    }
}

/// Система: grounded из output последнего physics step
///
/// Output-компонент появляется после первого step'а Rapier; до этого
/// GroundContact остаётся в default (airborne) — персонаж просто падает
/// первый tick.
pub fn read_rapier_ground_contact(
    mut query: Query<(&KinematicCharacterControllerOutput, &mut GroundContact)>,
) {
    for (output, mut contact) in query.iter_mut() {
        contact.grounded = output.grounded;
    }
}

/// Plugin: rapier mover в Mover phase конвейера
pub struct RapierMoverPlugin;

impl Plugin for RapierMoverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (read_rapier_ground_contact, submit_rapier_displacement)
                .chain()
                .in_set(LocomotionSet::Mover),
        );
    }
}

/// Spawn helper: персонаж с полным набором компонентов
///
/// - Transform + locomotion set (через required components)
/// - Rapier: kinematic body + capsule (высота 1.8m, радиус 0.4m)
/// - KinematicCharacterController (autostep/snap-to-ground defaults)
pub fn spawn_locomotion_character(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            LocomotionConfig::default(),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.4),
            KinematicCharacterController::default(),
        ))
        .id()
}
