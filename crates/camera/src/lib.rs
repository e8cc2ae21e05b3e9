//! Cameras: turn per-frame intent into a view matrix.
//!
//! # Invariants
//! - `front` is unit length after every orientation change.
//! - 3D pitch stays within `[-89, 89]` degrees.
//! - A 2D camera only reaches its target through smoothing in `look`.
//! - Camera operations never fail; out-of-range input is clamped or ignored.

mod camera;
mod camera2d;
mod camera3d;
mod scene_camera;

pub use camera::{Camera, FreeLook, WORLD_UP};
pub use camera2d::{Camera2D, DEFAULT_SMOOTH_SPEED};
pub use camera3d::{Camera3D, DEFAULT_SENSITIVITY, PITCH_LIMIT, RAY_ROTATION_SCALE};
pub use scene_camera::SceneCamera;

/// Movement per command when the engine does not configure one.
pub const DEFAULT_SPEED: f32 = 0.05;
