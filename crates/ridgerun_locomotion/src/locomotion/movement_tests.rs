//! Tests for camera-relative direction math and facing.

#[cfg(test)]
mod tests {
    use super::super::movement::{world_move_direction, yaw_toward};
    use crate::components::CameraFrame;
    use bevy::prelude::*;

    #[test]
    fn test_forward_intent_maps_to_camera_forward() {
        let frame = CameraFrame::default(); // forward = -Z, right = +X
        let dir = world_move_direction(&frame, Vec2::new(0.0, 1.0));
        assert!((dir - Vec3::NEG_Z).length() < 1.0e-6);
    }

    #[test]
    fn test_strafe_intent_maps_to_camera_right() {
        let frame = CameraFrame::default();
        let dir = world_move_direction(&frame, Vec2::new(1.0, 0.0));
        assert!((dir - Vec3::X).length() < 1.0e-6);
    }

    #[test]
    fn test_rotated_camera_rotates_movement() {
        // Камера повёрнута на 90° влево: её forward = -X
        let camera = Transform::from_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let frame = CameraFrame::from_camera_transform(&camera).unwrap();

        let dir = world_move_direction(&frame, Vec2::new(0.0, 1.0));
        assert!((dir - Vec3::NEG_X).length() < 1.0e-5);
    }

    #[test]
    fn test_camera_pitch_projected_out() {
        // Камера смотрит вперёд-вниз под 45°; frame обязан остаться
        // горизонтальным и unit-length (скорость не искажается на склонах)
        let camera = Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4));
        let frame = CameraFrame::from_camera_transform(&camera).unwrap();

        assert!(frame.forward.y.abs() < 1.0e-6);
        assert!((frame.forward.length() - 1.0).abs() < 1.0e-5);
        assert!((frame.forward - Vec3::NEG_Z).length() < 1.0e-5);
    }

    #[test]
    fn test_straight_down_camera_is_degenerate() {
        let camera =
            Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2));
        assert!(CameraFrame::from_camera_transform(&camera).is_none());
    }

    #[test]
    fn test_yaw_toward_forward_is_identity() {
        let rot = yaw_toward(Vec3::NEG_Z);
        assert!(rot.angle_between(Quat::IDENTITY) < 1.0e-5);
    }

    #[test]
    fn test_yaw_toward_faces_direction() {
        // forward facing-направления совпадает с заданным heading
        for dir in [Vec3::X, Vec3::NEG_X, Vec3::Z, Vec3::new(1.0, 0.0, -1.0).normalize()] {
            let rot = yaw_toward(dir);
            let forward = rot * Vec3::NEG_Z;
            assert!(
                (forward - dir).length() < 1.0e-5,
                "dir {:?} → forward {:?}",
                dir,
                forward
            );
        }
    }

    #[test]
    fn test_slerp_takes_shortest_path() {
        // Доворот через ±180°: полшага slerp не должен уводить дальше цели
        let from = yaw_toward(Vec3::new(-0.1, 0.0, 1.0).normalize()); // почти назад
        let to = yaw_toward(Vec3::new(0.1, 0.0, 1.0).normalize()); // почти назад, другая сторона

        let mid = from.slerp(to, 0.5);
        assert!(mid.angle_between(to) <= from.angle_between(to));
    }
}
