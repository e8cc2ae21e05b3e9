use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap: boxes that only share a face do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Point of this box closest to `p`.
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center(Vec3::new(1.5, 0.0, 0.0), Vec3::ONE);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_faces_do_not_intersect() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn closest_point_clamps() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::ONE);
        assert_eq!(a.closest_point(Vec3::new(5.0, 0.5, -3.0)), Vec3::new(1.0, 0.5, -1.0));
        assert!(a.contains_point(Vec3::new(0.5, -1.0, 0.0)));
        assert!(!a.contains_point(Vec3::new(0.5, -1.5, 0.0)));
    }

    #[test]
    fn negative_extents_are_normalized() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(a.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.center(), Vec3::ZERO);
    }
}
