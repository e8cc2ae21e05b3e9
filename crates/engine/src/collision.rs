use framecore_collision::{Aabb, CollisionSide};
use framecore_common::EntityId;
use framecore_entity::EntityRegistry;
use serde::{Deserialize, Serialize};

/// A contact found by the collision pass. `side` is from `a`'s point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionReport {
    pub a: EntityId,
    pub b: EntityId,
    pub side: CollisionSide,
}

/// Pairwise collision query over every collider-carrying entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionPass;

impl CollisionPass {
    /// Test every unordered pair once, in id order. Only contacts are reported.
    pub fn run(registry: &EntityRegistry) -> Vec<CollisionReport> {
        let solid: Vec<_> = registry
            .iter()
            .filter(|(_, c)| c.collider().is_some())
            .collect();

        let mut reports = Vec::new();
        for (i, (a_id, a)) in solid.iter().enumerate() {
            for (b_id, b) in &solid[i + 1..] {
                let side = a.collision_side(b);
                if side.is_hit() {
                    reports.push(CollisionReport {
                        a: **a_id,
                        b: **b_id,
                        side,
                    });
                }
            }
        }
        if !reports.is_empty() {
            tracing::debug!(contacts = reports.len(), "collision pass");
        }
        reports
    }

    /// World-space bounds of every collider, for debug line drawing.
    pub fn bounds(registry: &EntityRegistry) -> Vec<(EntityId, Aabb)> {
        registry
            .iter()
            .filter_map(|(id, c)| c.collider().map(|col| (*id, col.bounds(c.position()))))
            .collect()
    }
}
