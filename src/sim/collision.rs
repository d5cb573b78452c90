//! Axis-aligned collision tests
//!
//! Every intersection in the game uses the same rect-rect overlap
//! convention: player-vs-projectile (ends the run) and
//! player-vs-collectible (scores a point).

use glam::Vec2;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box anchored at its top-left corner
    pub fn from_topleft(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Box centered on a point with the given half-extents
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Overlap test; boxes merely touching along an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::from_topleft(Vec2::ZERO, Vec2::splat(50.0));
        let b = Aabb::from_topleft(Vec2::new(25.0, 25.0), Vec2::splat(50.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint() {
        let a = Aabb::from_topleft(Vec2::ZERO, Vec2::splat(50.0));
        let b = Aabb::from_topleft(Vec2::new(100.0, 0.0), Vec2::splat(50.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Aabb::from_topleft(Vec2::ZERO, Vec2::splat(50.0));
        let b = Aabb::from_topleft(Vec2::new(50.0, 0.0), Vec2::splat(50.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_containment() {
        let outer = Aabb::from_topleft(Vec2::ZERO, Vec2::splat(100.0));
        let inner = Aabb::from_center(Vec2::splat(50.0), Vec2::splat(5.0));
        assert!(outer.intersects(&inner));
        assert_eq!(inner.center(), Vec2::splat(50.0));
    }
}
