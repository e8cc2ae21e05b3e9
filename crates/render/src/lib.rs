//! Rendering contract between the core and an external draw layer.
//!
//! The core never talks to a graphics API. Each frame it assembles a
//! [`FramePacket`] (view, projection, per-entity draws and instance batches)
//! and hands it to a [`DrawLayer`] together with an explicit [`RenderContext`].
//!
//! # Invariants
//! - Draw layers cannot mutate entities or cameras; they only see the packet.
//! - Texture binding state lives in the context and starts unbound every frame.
//! - Instance batches only contain an entity's current copies.

mod context;
mod cull;
mod packet;
mod renderer;

pub use context::{RenderContext, RenderError, TEXTURE_UNITS, TextureId};
pub use cull::DistanceCuller;
pub use packet::{FramePacket, InstanceBatch};
pub use renderer::{DebugTextRenderer, DrawLayer};

use framecore_common::DisplayConfig;
use glam::Mat4;

pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100_000.0;

/// Projection every entity is drawn with.
pub fn perspective(display: DisplayConfig) -> Mat4 {
    framecore_common::math::perspective(
        FIELD_OF_VIEW_DEGREES,
        display.aspect(),
        NEAR_PLANE,
        FAR_PLANE,
    )
}
