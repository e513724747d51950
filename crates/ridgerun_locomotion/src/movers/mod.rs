//! Body-mover backends (opaque коллаборатор locomotion core)
//!
//! Контракт: backend потребляет PendingDisplacement ОДНИМ submission за
//! tick (displacement уже в world units * dt), применяет его к позиции
//! и пишет post-resolution grounded в GroundContact. Core никогда не
//! трогает collision geometry сам.
//!
//! Backends:
//! - plane: плоский пол, headless симуляция и тесты (без Rapier)
//! - rapier: KinematicCharacterController (capsule + реальные коллизии)

pub mod plane;
pub mod rapier;

pub use plane::{GroundPlane, PlaneMoverPlugin};
pub use rapier::{spawn_locomotion_character, RapierMoverPlugin};
