//! The plane primitive: construction, signed distance, half-space classification
//! and rigid adjustments.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use log::trace;
use nalgebra::{Point3, Vector3};

use crate::{Aabb, PlaneError, PlaneSide};

/// A plane `a·x + b·y + c·z = d`.
///
/// Points with positive [`signed_distance`](Plane::signed_distance) are *outside*,
/// points with negative distance are *inside*.
///
/// Most queries assume `(a, b, c)` has unit length. [`Plane::from_points`] and
/// [`Plane::normalize`] establish this; the raw constructors do not.
///
/// Equality is exact over the four coefficients: planes that describe the same
/// surface with different scale compare unequal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Plane {
    /// Creates a plane from raw coefficients. No normalization is performed.
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Creates a plane from a normal and offset. No normalization is performed.
    #[inline]
    pub fn from_normal(normal: Vector3<f32>, d: f32) -> Self {
        Self::new(normal.x, normal.y, normal.z, d)
    }

    /// Creates a plane from a triangle.
    ///
    /// The normal is `normalize((p1 - p0) × (p2 - p0))`, so counter-clockwise
    /// winding seen from a point faces the normal toward it. The offset is
    /// `-normal · centroid`.
    ///
    /// Collinear points yield NaN coefficients; use [`Plane::try_from_points`]
    /// to reject them instead.
    pub fn from_points(p0: Point3<f32>, p1: Point3<f32>, p2: Point3<f32>) -> Self {
        let normal = (p1 - p0).cross(&(p2 - p0)).normalize();
        Self::with_centroid_offset(normal, p0, p1, p2)
    }

    /// Like [`Plane::from_points`], but fails on collinear points.
    pub fn try_from_points(
        p0: Point3<f32>,
        p1: Point3<f32>,
        p2: Point3<f32>,
    ) -> Result<Self, PlaneError> {
        let normal = (p1 - p0).cross(&(p2 - p0));
        let magnitude = normal.norm();
        if !magnitude.is_normal() {
            trace!("rejecting triangle {p0} {p1} {p2}: normal magnitude {magnitude}");
            return Err(PlaneError::DegenerateNormal { magnitude });
        }
        Ok(Self::with_centroid_offset(normal / magnitude, p0, p1, p2))
    }

    fn with_centroid_offset(
        normal: Vector3<f32>,
        p0: Point3<f32>,
        p1: Point3<f32>,
        p2: Point3<f32>,
    ) -> Self {
        let centroid = (p0.coords + p1.coords + p2.coords) / 3.0;
        Self::from_normal(normal, -normal.dot(&centroid))
    }

    /// The normal `(a, b, c)`.
    #[inline]
    pub fn normal(&self) -> Vector3<f32> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Overwrites `(a, b, c)`, keeping `d`.
    #[inline]
    pub fn set_normal(&mut self, normal: Vector3<f32>) {
        self.a = normal.x;
        self.b = normal.y;
        self.c = normal.z;
    }

    /// The foot of the perpendicular from the origin onto the plane.
    pub fn point_on_plane(&self) -> Point3<f32> {
        self.closest_point(Point3::origin())
    }

    /// Projects `point` onto the plane.
    #[inline]
    pub fn closest_point(&self, point: Point3<f32>) -> Point3<f32> {
        point - self.normal() * self.signed_distance(point)
    }

    /// Signed distance from `point`: positive outside, negative inside.
    #[inline]
    pub fn signed_distance(&self, point: Point3<f32>) -> f32 {
        self.signed_distance_xyz(point.x, point.y, point.z)
    }

    /// [`Plane::signed_distance`] from loose coordinates.
    #[inline]
    pub fn signed_distance_xyz(&self, x: f32, y: f32, z: f32) -> f32 {
        self.a * x + self.b * y + self.c * z - self.d
    }

    /// Classifies a point with the default tolerance.
    #[inline]
    pub fn classify_point(&self, point: Point3<f32>) -> PlaneSide {
        PlaneSide::classify(self.signed_distance(point), None)
    }

    /// Classifies a point with a custom tolerance.
    #[inline]
    pub fn classify_point_with_epsilon(&self, point: Point3<f32>, epsilon: f32) -> PlaneSide {
        PlaneSide::classify(self.signed_distance(point), Some(epsilon))
    }

    /// [`Plane::classify_point`] from loose coordinates.
    #[inline]
    pub fn classify_xyz(&self, x: f32, y: f32, z: f32) -> PlaneSide {
        PlaneSide::classify(self.signed_distance_xyz(x, y, z), None)
    }

    /// Classifies a box by its corner furthest toward the inside.
    ///
    /// This is a conservative-outside test. `Outside` means the whole box is
    /// outside; `Inside` and `Intersects` only describe that one corner, so a box
    /// straddling the plane can report `Inside`.
    pub fn classify_box(&self, bounds: &Aabb) -> PlaneSide {
        self.classify_point(self.inner_corner(bounds))
    }

    /// Classifies `bounds` at its position after moving by `translation`.
    ///
    /// Only the moved box is tested, never the start position. Reports `Inside`
    /// if the moved corner furthest toward the outside is still inside,
    /// `Outside` if the moved corner furthest toward the inside is already
    /// outside, and `Intersects` otherwise.
    pub fn classify_swept_box(&self, bounds: &Aabb, translation: Vector3<f32>) -> PlaneSide {
        let trailing = self.outer_corner(bounds) + translation;
        if self.classify_point(trailing) == PlaneSide::Inside {
            return PlaneSide::Inside;
        }

        let leading = self.inner_corner(bounds) + translation;
        if self.classify_point(leading) == PlaneSide::Outside {
            return PlaneSide::Outside;
        }

        PlaneSide::Intersects
    }

    /// Box corner with the smallest signed distance. Zero coefficients pick `min`.
    fn inner_corner(&self, bounds: &Aabb) -> Point3<f32> {
        Point3::new(
            if self.a >= 0.0 { bounds.min_x() } else { bounds.max_x() },
            if self.b >= 0.0 { bounds.min_y() } else { bounds.max_y() },
            if self.c >= 0.0 { bounds.min_z() } else { bounds.max_z() },
        )
    }

    /// Box corner with the largest signed distance. Zero coefficients pick `min`.
    fn outer_corner(&self, bounds: &Aabb) -> Point3<f32> {
        Point3::new(
            if self.a <= 0.0 { bounds.min_x() } else { bounds.max_x() },
            if self.b <= 0.0 { bounds.min_y() } else { bounds.max_y() },
            if self.c <= 0.0 { bounds.min_z() } else { bounds.max_z() },
        )
    }

    /// Returns the plane with inside and outside swapped.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }

    /// Moves the plane by `translation`. The normal is not renormalized.
    #[inline]
    pub fn translate(&mut self, translation: Vector3<f32>) {
        self.d += self.normal().dot(&translation);
    }

    /// Returns a copy moved by `translation`.
    #[inline]
    pub fn translated(&self, translation: Vector3<f32>) -> Self {
        let mut plane = *self;
        plane.translate(translation);
        plane
    }

    #[inline]
    pub fn translated_xyz(&self, x: f32, y: f32, z: f32) -> Self {
        self.translated(Vector3::new(x, y, z))
    }

    /// Scales all four coefficients so the normal has unit length.
    ///
    /// A zero, subnormal or non-finite normal magnitude is rejected and the
    /// plane is left unchanged.
    pub fn normalize(&mut self) -> Result<(), PlaneError> {
        let magnitude = self.normal().norm();
        if !magnitude.is_normal() {
            trace!("refusing to normalize {}: magnitude {magnitude}", self);
            return Err(PlaneError::DegenerateNormal { magnitude });
        }

        self.a /= magnitude;
        self.b /= magnitude;
        self.c /= magnitude;
        self.d /= magnitude;
        Ok(())
    }

    /// By-value form of [`Plane::normalize`].
    pub fn normalized(&self) -> Result<Self, PlaneError> {
        let mut plane = *self;
        plane.normalize()?;
        Ok(plane)
    }

    /// Orders planes by `d`, descending, at integer granularity.
    ///
    /// The difference `other.d - self.d` is rounded half away from zero, so
    /// offsets less than half a unit apart compare `Equal`. This is not a
    /// total order and does not agree with `==`; use it with `sort_by`.
    pub fn compare_by_offset(&self, other: &Plane) -> Ordering {
        (other.d - self.d)
            .round()
            .partial_cmp(&0.0)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.d == other.d && self.a == other.a && self.b == other.b && self.c == other.c
    }
}

// -0.0 == 0.0, so both must hash alike.
fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

impl Hash for Plane {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for coefficient in [self.a, self.b, self.c, self.d] {
            canonical_bits(coefficient).hash(state);
        }
    }
}

impl Neg for Plane {
    type Output = Plane;

    fn neg(self) -> Plane {
        self.negated()
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}) {}", self.a, self.b, self.c, self.d)
    }
}
