//! Axis-aligned bounding box consumed by the box classification queries.

use nalgebra::{Point3, Vector3};

/// An axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    /// Creates a box from its corners; `min` must not exceed `max` on any axis.
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Creates a box spanning `half_extents` on each side of `center`.
    pub fn from_center_half_extents(center: Point3<f32>, half_extents: Vector3<f32>) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest `x` covered by the box.
    #[inline]
    pub fn min_x(&self) -> f32 {
        self.min.x
    }

    /// Smallest `y` covered by the box.
    #[inline]
    pub fn min_y(&self) -> f32 {
        self.min.y
    }

    /// Smallest `z` covered by the box.
    #[inline]
    pub fn min_z(&self) -> f32 {
        self.min.z
    }

    /// Largest `x` covered by the box.
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.max.x
    }

    /// Largest `y` covered by the box.
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.max.y
    }

    /// Largest `z` covered by the box.
    #[inline]
    pub fn max_z(&self) -> f32 {
        self.max.z
    }

    /// Midpoint of `min` and `max`.
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns a copy moved by `translation`.
    pub fn translated(&self, translation: Vector3<f32>) -> Self {
        Self {
            min: self.min + translation,
            max: self.max + translation,
        }
    }

    /// The eight corners, `min` first and `max` last.
    pub fn corners(&self) -> [Point3<f32>; 8] {
        let (lo, hi) = (&self.min, &self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_half_extents_round_trip() {
        let aabb =
            Aabb::from_center_half_extents(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.5, 1.0, 2.0));
        assert_eq!(aabb.min, Point3::new(0.5, 1.0, 1.0));
        assert_eq!(aabb.max, Point3::new(1.5, 3.0, 5.0));
        assert_eq!(aabb.center(), Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn corners_span_min_to_max() {
        let aabb = Aabb::new(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0));
        let corners = aabb.corners();
        assert_eq!(corners[0], aabb.min);
        assert_eq!(corners[7], aabb.max);
        for corner in corners {
            assert!(corner.x == aabb.min_x() || corner.x == aabb.max_x());
            assert!(corner.y == aabb.min_y() || corner.y == aabb.max_y());
            assert!(corner.z == aabb.min_z() || corner.z == aabb.max_z());
        }
    }

    #[test]
    fn translated_moves_both_corners() {
        let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let moved = aabb.translated(Vector3::new(2.0, 0.0, -1.0));
        assert_eq!(moved.min, Point3::new(2.0, 0.0, -1.0));
        assert_eq!(moved.max, Point3::new(3.0, 1.0, 0.0));
    }
}
