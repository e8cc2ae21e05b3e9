//! Collision queries between pairs of collider descriptors.
//!
//! # Invariants
//! - Colliders are immutable values; a query never changes either side.
//! - A query returns `CollisionSide::None` (code 0) when nothing touches.

mod aabb;
mod collider;

pub use aabb::Aabb;
pub use collider::{Collider, CollisionSide};
