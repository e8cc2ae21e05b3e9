//! Engine: owns the scene camera and entities and runs the per-frame pipeline.
//!
//! Per frame: input → camera → entity update → copy culling → collision
//! pass → frame packet for the draw layer.
//!
//! # Invariants
//! - Exactly one camera, chosen from the configured dimension count.
//! - Frames are synchronous; nothing runs between `frame` calls.
//! - The draw layer only ever sees the last assembled packet.

pub mod collision;
pub mod config;
pub mod engine;

pub use collision::{CollisionPass, CollisionReport};
pub use config::{CameraSettings, ConfigError, EngineConfig};
pub use engine::Engine;
