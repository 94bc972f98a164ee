//! Convex polygons and splitting them along a plane.

use nalgebra::Point3;

use crate::{Classification, Plane, PlaneSide, Triangle};

/// A convex polygon with at least three coplanar vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3<f32>>,
}

/// The result of [`Polygon::split`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Split {
    /// Part in the negative half-space, if any.
    pub inside: Option<Polygon>,
    /// Part in the positive half-space, if any.
    pub outside: Option<Polygon>,
}

impl Polygon {
    /// # Panics (debug builds only)
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Point3<f32>>) -> Self {
        debug_assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        Self { vertices }
    }

    /// The vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The supporting plane, through the first three vertices.
    pub fn plane(&self) -> Plane {
        Triangle::new(self.vertices[0], self.vertices[1], self.vertices[2]).plane()
    }

    /// Classifies every vertex against `plane`.
    pub fn classify(&self, plane: &Plane) -> Classification {
        Classification::from_sides(self.vertices.iter().map(|v| plane.classify_point(*v)))
    }

    /// Cuts the polygon along `plane`.
    ///
    /// Polygons entirely on one side come back whole on that side; coplanar
    /// polygons go inside. Spanning polygons are clipped edge by edge, with
    /// on-plane vertices shared by both halves and new vertices placed by
    /// [`Plane::segment_crossing`].
    pub fn split(&self, plane: &Plane) -> Split {
        let distances: Vec<f32> =
            self.vertices.iter().map(|v| plane.signed_distance(*v)).collect();
        let sides: Vec<PlaneSide> =
            distances.iter().map(|d| PlaneSide::classify(*d, None)).collect();

        match Classification::from_sides(sides.iter().copied()) {
            Classification::Inside | Classification::Coplanar => Split {
                inside: Some(self.clone()),
                outside: None,
            },
            Classification::Outside => Split {
                inside: None,
                outside: Some(self.clone()),
            },
            Classification::Spanning => self.clip(&distances, &sides),
        }
    }

    fn clip(&self, distances: &[f32], sides: &[PlaneSide]) -> Split {
        let n = self.vertices.len();
        let mut inside = Vec::with_capacity(n + 1);
        let mut outside = Vec::with_capacity(n + 1);

        for i in 0..n {
            let j = (i + 1) % n;
            let current = self.vertices[i];

            match sides[i] {
                PlaneSide::Inside => inside.push(current),
                PlaneSide::Outside => outside.push(current),
                PlaneSide::Intersects => {
                    inside.push(current);
                    outside.push(current);
                }
            }

            let crosses = matches!(
                (sides[i], sides[j]),
                (PlaneSide::Inside, PlaneSide::Outside) | (PlaneSide::Outside, PlaneSide::Inside)
            );
            if crosses {
                let point =
                    Plane::segment_crossing(current, self.vertices[j], distances[i], distances[j]);
                inside.push(point);
                outside.push(point);
            }
        }

        Split {
            inside: (inside.len() >= 3).then(|| Polygon::new(inside)),
            outside: (outside.len() >= 3).then(|| Polygon::new(outside)),
        }
    }
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        Polygon::new(triangle.vertices().to_vec())
    }
}

impl From<&Triangle> for Polygon {
    fn from(triangle: &Triangle) -> Self {
        Polygon::new(triangle.vertices().to_vec())
    }
}
