//! Plane–plane–plane and segment–plane intersections.

use log::trace;
use nalgebra::Point3;

use crate::Plane;
use crate::tolerance::NORMAL_EPSILON;

/// The point returned by [`Plane::intersection`] when the planes have no
/// unique common point.
pub const NO_INTERSECTION: Point3<f32> = Point3::new(f32::NAN, f32::NAN, f32::NAN);

/// Returns `true` for the [`NO_INTERSECTION`] sentinel (any NaN coordinate).
#[inline]
pub fn is_sentinel(point: &Point3<f32>) -> bool {
    point.x.is_nan() || point.y.is_nan() || point.z.is_nan()
}

impl Plane {
    /// Intersects three planes.
    ///
    /// Solves the 3×3 system by cofactor expansion in `f64`. When the
    /// determinant is within [`NORMAL_EPSILON`] of zero (two planes parallel,
    /// or all three sharing a line) this returns [`NO_INTERSECTION`], whose
    /// coordinates are all NaN.
    pub fn intersection(p1: &Plane, p2: &Plane, p3: &Plane) -> Point3<f32> {
        Self::try_intersection(p1, p2, p3).unwrap_or(NO_INTERSECTION)
    }

    /// Like [`Plane::intersection`], with `None` in place of the sentinel.
    pub fn try_intersection(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Point3<f32>> {
        Self::try_intersection_with_epsilon(p1, p2, p3, NORMAL_EPSILON)
    }

    /// [`Plane::try_intersection`] with a custom determinant threshold.
    pub fn try_intersection_with_epsilon(
        p1: &Plane,
        p2: &Plane,
        p3: &Plane,
        epsilon: f32,
    ) -> Option<Point3<f32>> {
        let [a1, b1, c1, d1] = p1.coefficients_f64();
        let [a2, b2, c2, d2] = p2.coefficients_f64();
        let [a3, b3, c3, d3] = p3.coefficients_f64();

        let bc1 = b1 * c3 - b3 * c1;
        let bc2 = b2 * c1 - b1 * c2;
        let bc3 = b3 * c2 - b2 * c3;

        let ad1 = a1 * d3 - a3 * d1;
        let ad2 = a2 * d1 - a1 * d2;
        let ad3 = a3 * d2 - a2 * d3;

        let x = -(d1 * bc3 + d2 * bc1 + d3 * bc2);
        let y = -(c1 * ad3 + c2 * ad1 + c3 * ad2);
        let z = b1 * ad3 + b2 * ad1 + b3 * ad2;
        let w = -(a1 * bc3 + a2 * bc1 + a3 * bc2);

        let epsilon = f64::from(epsilon);
        if w > -epsilon && w < epsilon {
            trace!("no unique intersection of {p1}, {p2}, {p3}: determinant {w}");
            return None;
        }

        Some(Point3::new((x / w) as f32, (y / w) as f32, (z / w) as f32))
    }

    /// Point where segment `start → end` crosses a plane, given the signed
    /// distances of both endpoints.
    ///
    /// Computed as `end - delta · (end - start)` with
    /// `delta = dist_end / (dist_end - dist_start)`, so `dist_end == 0` yields
    /// `end` and `dist_start == 0` yields `start`. The distances are expected
    /// to bracket zero; otherwise the result extrapolates past the segment.
    #[inline]
    pub fn segment_crossing(
        start: Point3<f32>,
        end: Point3<f32>,
        dist_start: f32,
        dist_end: f32,
    ) -> Point3<f32> {
        let delta = dist_end / (dist_end - dist_start);
        end - (end - start) * delta
    }

    /// Point where segment `start → end` crosses this plane.
    pub fn crossing(&self, start: Point3<f32>, end: Point3<f32>) -> Point3<f32> {
        Self::segment_crossing(
            start,
            end,
            self.signed_distance(start),
            self.signed_distance(end),
        )
    }

    fn coefficients_f64(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d].map(f64::from)
    }
}
