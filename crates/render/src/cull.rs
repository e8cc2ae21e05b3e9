use framecore_entity::{Child, EntityRegistry};
use glam::Vec3;

/// Selects which copies are drawn, by distance from the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceCuller {
    pub render_distance: f32,
}

impl DistanceCuller {
    pub fn new(render_distance: f32) -> Self {
        Self { render_distance }
    }

    /// The entity's own distance when set (nonzero), otherwise the global one.
    pub fn effective_distance(&self, child: &Child) -> f32 {
        match child.specific_render_distance() {
            d if d != 0.0 => d.abs(),
            _ => self.render_distance,
        }
    }

    /// Rebuild one entity's current copies around `eye`. Returns how many were kept.
    pub fn refresh(&self, child: &mut Child, eye: Vec3) -> usize {
        let distance = self.effective_distance(child);
        let limit = distance * distance;
        child.refresh_current_copies(|c| c.position.distance_squared(eye) <= limit)
    }

    /// Refresh every copy-enabled entity. Returns the total number of copies kept.
    pub fn cull(&self, registry: &mut EntityRegistry, eye: Vec3) -> usize {
        let mut kept = 0;
        for (_, child) in registry.iter_mut() {
            if child.copying_enabled() {
                kept += self.refresh(child, eye);
            }
        }
        tracing::trace!(kept, distance = self.render_distance, "copies culled");
        kept
    }
}
