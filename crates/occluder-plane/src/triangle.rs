//! Triangles as a source of planes.

use nalgebra::Point3;

use crate::{Classification, Plane, PlaneError};

/// A triangle given by three vertices.
///
/// Counter-clockwise winding, seen from outside, makes the derived plane's
/// normal point outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3<f32>; 3],
}

impl Triangle {
    /// Creates a triangle from its vertices in winding order.
    pub fn new(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// The vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>; 3] {
        &self.vertices
    }

    pub fn centroid(&self) -> Point3<f32> {
        let [a, b, c] = &self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// The supporting plane: every vertex has a signed distance of zero.
    ///
    /// The normal follows the winding as in [`Plane::from_points`], but the
    /// offset is taken through the centroid itself, not its mirror image.
    pub fn plane(&self) -> Plane {
        let [a, b, c] = self.vertices;
        self.through_centroid(Plane::from_points(a, b, c))
    }

    /// The supporting plane, or an error for a zero-area triangle.
    pub fn try_plane(&self) -> Result<Plane, PlaneError> {
        let [a, b, c] = self.vertices;
        Plane::try_from_points(a, b, c).map(|plane| self.through_centroid(plane))
    }

    fn through_centroid(&self, plane: Plane) -> Plane {
        let normal = plane.normal();
        Plane::from_normal(normal, normal.dot(&self.centroid().coords))
    }

    /// Classifies all three vertices against `plane`.
    pub fn classify(&self, plane: &Plane) -> Classification {
        Classification::from_sides(self.vertices.iter().map(|v| plane.classify_point(*v)))
    }
}

impl From<Triangle> for Plane {
    fn from(triangle: Triangle) -> Self {
        triangle.plane()
    }
}

impl From<&Triangle> for Plane {
    fn from(triangle: &Triangle) -> Self {
        triangle.plane()
    }
}
