//! Collision shapes
//!
//! Every physical object in the game (player, platform, obstacle, wall,
//! ground slab, collectible, feature object) is an axis-aligned box.

use serde::{Serialize, Deserialize};
use torii_math::Vec3;

/// An axis-aligned bounding box stored as center + half extents
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center in world space
    pub center: Vec3,
    /// Half extents, non-negative on every axis
    pub half: Vec3,
}

impl Aabb {
    /// Create a new box from center and half extents
    ///
    /// Half extents are taken component-wise absolute, so the non-negative
    /// invariant holds for any input.
    pub fn new(center: Vec3, half: Vec3) -> Self {
        Self { center, half: half.abs() }
    }

    /// Create a box from min and max corners
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new((min + max) * 0.5, (max - min) * 0.5)
    }

    /// Minimum corner
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.half
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.half
    }

    /// Y coordinate of the top face
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Y coordinate of the bottom face
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half.y
    }

    /// Return a copy moved by `delta`
    #[inline]
    pub fn translated(&self, delta: Vec3) -> Self {
        Self { center: self.center + delta, half: self.half }
    }

    /// Check if a point is inside or on the box
    pub fn contains(&self, point: Vec3) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half.x && d.y <= self.half.y && d.z <= self.half.z
    }

    /// Separating-axis overlap test; touching faces count as overlapping
    ///
    /// Symmetric: `a.intersects(&b) == b.intersects(&a)` for all boxes.
    pub fn intersects(&self, other: &Aabb) -> bool {
        (self.center.x - other.center.x).abs() <= self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() <= self.half.y + other.half.y
            && (self.center.z - other.center.z).abs() <= self.half.z + other.half.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_extents_made_non_negative() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(b.half, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_min_max() {
        let b = Aabb::from_min_max(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, 4.0, 6.0));
        assert_eq!(b.center, Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(b.half, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_min_max_top_bottom() {
        let b = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(b.min(), Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(b.max(), Vec3::new(1.5, 3.0, 4.5));
        assert_eq!(b.top(), 3.0);
        assert_eq!(b.bottom(), 1.0);
    }

    #[test]
    fn test_contains() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        assert!(b.contains(Vec3::ZERO));
        assert!(b.contains(Vec3::new(1.0, 1.0, 1.0))); // corner
        assert!(!b.contains(Vec3::new(1.1, 0.0, 0.0)));
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Vec3::new(1.5, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_intersects_touching_counts() {
        let a = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_intersects_separated() {
        let a = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Vec3::new(2.1, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_requires_all_axes() {
        let a = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        // Overlaps on X and Z but separated on Y
        let b = Aabb::new(Vec3::new(0.5, 5.0, 0.5), Vec3::new(1.0, 1.0, 1.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_symmetric() {
        let boxes = [
            Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0)),
            Aabb::new(Vec3::new(1.9, 0.3, -0.4), Vec3::new(1.0, 0.5, 2.0)),
            Aabb::new(Vec3::new(-3.0, 2.0, 1.0), Vec3::new(0.2, 0.2, 0.2)),
            Aabb::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(5.0, 0.1, 5.0)),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.intersects(b), b.intersects(a));
            }
        }
    }

    #[test]
    fn test_translated() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));
        let moved = b.translated(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(moved.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(moved.half, b.half);
    }
}
