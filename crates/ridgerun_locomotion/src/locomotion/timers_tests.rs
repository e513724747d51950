//! Tests for jump qualification windows and impulse magnitude.

#[cfg(test)]
mod tests {
    use super::super::timers::{jump_impulse_speed, jump_qualifies};
    use crate::components::{LocomotionConfig, TIME_NEVER};

    #[test]
    fn test_jump_qualifies_on_ground_press() {
        // Нажатие стоя на земле: оба окна тривиально выполнены
        let now = 5.0;
        assert!(jump_qualifies(now, now, now, 0.15, 0.2));
    }

    #[test]
    fn test_coyote_window_allows_airborne_jump() {
        // Сценарий из spec: press t=1.0, last_grounded=0.95, coyote=0.15
        assert!(jump_qualifies(1.0, 0.95, 1.0, 0.15, 0.2));
    }

    #[test]
    fn test_coyote_window_expired() {
        // Земля была 0.3 сек назад — coyote (0.15) уже истёк
        assert!(!jump_qualifies(1.0, 0.7, 1.0, 0.15, 0.2));
    }

    #[test]
    fn test_buffer_window_on_landing() {
        // Сценарий из spec: press t=2.0 в воздухе, приземление t=2.05.
        // last_grounded обновлён на 2.05 → оба окна выполнены.
        assert!(jump_qualifies(2.05, 2.05, 2.0, 0.15, 0.2));
    }

    #[test]
    fn test_buffer_window_expired() {
        // Request старше buffer window (0.2) — не срабатывает
        assert!(!jump_qualifies(2.3, 2.3, 2.0, 0.15, 0.2));
    }

    #[test]
    fn test_never_sentinel_never_qualifies() {
        // После срабатывания request сбрасывается в TIME_NEVER —
        // повторная оценка того же request не может выстрелить
        assert!(!jump_qualifies(5.0, 5.0, TIME_NEVER, 0.15, 0.2));
        // И до первого касания земли прыжок невозможен
        assert!(!jump_qualifies(5.0, TIME_NEVER, 5.0, 0.15, 0.2));
    }

    #[test]
    fn test_impulse_magnitude() {
        let config = LocomotionConfig::default();
        let v = jump_impulse_speed(config.jump_impulse, config.gravity);

        // sqrt(8.0 * -2 * -9.81) = sqrt(156.96) ≈ 12.528
        assert!((v - 156.96f32.sqrt()).abs() < 1.0e-4);
        assert!(v > 0.0);
    }
}
