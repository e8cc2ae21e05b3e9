use framecore_common::math::translation;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::handle::MaterialHandle;

/// One extra placement of an entity's mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CopyDescriptor {
    pub position: Vec3,
    pub material: MaterialHandle,
}

impl CopyDescriptor {
    pub fn new(x: f32, y: f32, z: f32, material: MaterialHandle) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            material,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        translation(self.position)
    }
}

/// Registry of copies plus the subset selected for the current frame.
#[derive(Debug, Clone, Default)]
pub struct CopySet {
    copies: Vec<CopyDescriptor>,
    current: Vec<CopyDescriptor>,
    enabled: bool,
}

impl CopySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy. No deduplication; insertion order is kept.
    pub fn add(&mut self, copy: CopyDescriptor) {
        self.copies.push(copy);
    }

    pub fn copies(&self) -> &[CopyDescriptor] {
        &self.copies
    }

    pub fn current(&self) -> &[CopyDescriptor] {
        &self.current
    }

    pub fn len(&self) -> usize {
        self.copies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }

    pub fn clear_current(&mut self) {
        self.current.clear();
    }

    /// Rebuild the current selection from every registered copy `keep` accepts.
    ///
    /// Returns the number of copies selected.
    pub fn refresh<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&CopyDescriptor) -> bool,
    {
        self.current.clear();
        self.current
            .extend(self.copies.iter().filter(|c| keep(c)).copied());
        self.current.len()
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Positions of the current copies, ready for an instance buffer.
    pub fn current_positions(&self) -> Vec<[f32; 3]> {
        self.current.iter().map(|c| c.position.to_array()).collect()
    }
}
