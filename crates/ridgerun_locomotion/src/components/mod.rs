//! ECS Components для locomotion core
//!
//! Организация по доменам:
//! - locomotion: состояние и tunables персонажа (LocomotionConfig, LocomotionState)
//! - camera: camera-relative reference frame (LocomotionCamera, CameraFrame)
//! - animation: derived animation parameters + sink (AnimationParams, AnimationOutput)

pub mod animation;
pub mod camera;
pub mod locomotion;

// Re-exports для удобного импорта
pub use animation::*;
pub use camera::*;
pub use locomotion::*;
