use framecore_common::EntityId;
use glam::Mat4;

use crate::handle::{MaterialHandle, MeshHandle};

/// What an entity hands to the draw layer for one submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub entity: EntityId,
    pub view: Mat4,
    pub model: Mat4,
    pub mesh: Option<MeshHandle>,
    pub material: Option<MaterialHandle>,
    /// Set when drawing a copy through the instanced path.
    pub instanced: bool,
}
