//! Camera reference frame для camera-relative movement
//!
//! Камера — внешний коллаборатор: core читает только её forward/right,
//! сэмплируя ЗАНОВО каждый tick (камера двигается независимо).

use bevy::prelude::*;

/// Marker: entity чей Transform задаёт active camera frame
///
/// Host вешает на камеру (или на proxy entity, который он сам двигает).
/// Core не управляет камерой — только читает.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LocomotionCamera;

/// Горизонтальный reference frame активной камеры (текущий tick)
///
/// forward/right — направления камеры, спроецированные на XZ plane и
/// re-normalized: pitch камеры не должен искажать скорость на склонах.
///
/// Без LocomotionCamera entity остаётся world-axis fallback (degraded
/// mode: движение world-relative, не failure).
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraFrame {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for CameraFrame {
    fn default() -> Self {
        // World axes: forward = -Z (Bevy convention), right = +X
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

impl CameraFrame {
    /// Строит горизонтальный frame из camera transform.
    ///
    /// Возвращает None если камера смотрит строго вдоль Y (проекция
    /// forward вырождается) — caller сохраняет предыдущий frame.
    pub fn from_camera_transform(transform: &Transform) -> Option<Self> {
        let forward = transform.forward().as_vec3();
        let right = transform.right().as_vec3();

        let flat_forward = Vec3::new(forward.x, 0.0, forward.z);
        let flat_right = Vec3::new(right.x, 0.0, right.z);

        let forward = flat_forward.try_normalize()?;
        let right = flat_right.try_normalize()?;

        Some(Self { forward, right })
    }
}
