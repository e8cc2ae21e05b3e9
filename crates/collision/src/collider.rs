use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;

/// Geometric descriptor attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Box { half_extents: [f32; 3] },
    Sphere { radius: f32 },
}

impl Default for Collider {
    fn default() -> Self {
        Self::Box {
            half_extents: [0.5, 0.5, 0.5],
        }
    }
}

/// Which side of the querying collider made contact.
///
/// The integer codes are part of the query contract: 0 is always "no collision".
/// Front faces -Z, the direction an unrotated camera looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum CollisionSide {
    None = 0,
    Top = 1,
    Bottom = 2,
    Left = 3,
    Right = 4,
    Front = 5,
    Back = 6,
}

impl CollisionSide {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Top),
            2 => Some(Self::Bottom),
            3 => Some(Self::Left),
            4 => Some(Self::Right),
            5 => Some(Self::Front),
            6 => Some(Self::Back),
            _ => None,
        }
    }

    pub fn is_hit(self) -> bool {
        self != Self::None
    }
}

impl Collider {
    /// Half extents of the collider's bounding box.
    pub fn half_extents(&self) -> Vec3 {
        match self {
            Self::Box { half_extents } => Vec3::from_array(*half_extents).abs(),
            Self::Sphere { radius } => Vec3::splat(radius.abs()),
        }
    }

    pub fn bounds(&self, center: Vec3) -> Aabb {
        Aabb::from_center(center, self.half_extents())
    }

    /// Test this collider, advanced one step by `velocity`, against `other`.
    pub fn check(
        &self,
        position: Vec3,
        velocity: Vec3,
        other_position: Vec3,
        other: &Collider,
    ) -> CollisionSide {
        let moved = position + velocity;
        if !self.overlaps(moved, other, other_position) {
            return CollisionSide::None;
        }
        let side = contact_side(moved, self.half_extents(), other_position, other.half_extents());
        tracing::trace!(code = side.code(), "collision detected");
        side
    }

    /// Planar query: the other collider sits at `(other_x, other_y)` in this collider's z plane.
    pub fn check_raw(
        &self,
        position: Vec3,
        velocity: Vec3,
        other_x: f32,
        other_y: f32,
        other: &Collider,
    ) -> CollisionSide {
        self.check(
            position,
            velocity,
            Vec3::new(other_x, other_y, position.z),
            other,
        )
    }

    fn overlaps(&self, center: Vec3, other: &Collider, other_center: Vec3) -> bool {
        match (self, other) {
            (Self::Sphere { radius: a }, Self::Sphere { radius: b }) => {
                let reach = a.abs() + b.abs();
                center.distance_squared(other_center) < reach * reach
            }
            (Self::Box { .. }, Self::Sphere { radius }) => {
                sphere_hits_box(other_center, radius.abs(), &self.bounds(center))
            }
            (Self::Sphere { radius }, Self::Box { .. }) => {
                sphere_hits_box(center, radius.abs(), &other.bounds(other_center))
            }
            (Self::Box { .. }, Self::Box { .. }) => {
                self.bounds(center).intersects(&other.bounds(other_center))
            }
        }
    }
}

fn sphere_hits_box(center: Vec3, radius: f32, aabb: &Aabb) -> bool {
    aabb.closest_point(center).distance_squared(center) < radius * radius
}

/// Side of contact from the axis of least penetration. Ties favor Y, then X.
fn contact_side(center: Vec3, half: Vec3, other_center: Vec3, other_half: Vec3) -> CollisionSide {
    let d = other_center - center;
    let penetration = (half + other_half) - d.abs();

    if penetration.y <= penetration.x && penetration.y <= penetration.z {
        if d.y > 0.0 {
            CollisionSide::Top
        } else {
            CollisionSide::Bottom
        }
    } else if penetration.x <= penetration.z {
        if d.x > 0.0 {
            CollisionSide::Right
        } else {
            CollisionSide::Left
        }
    } else if d.z < 0.0 {
        CollisionSide::Front
    } else {
        CollisionSide::Back
    }
}
