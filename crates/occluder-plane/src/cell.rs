//! Corners of convex cells bounded by half-spaces.

use log::debug;
use nalgebra::Point3;

use crate::{Plane, PlaneSide, Tolerance};

/// Corners of the convex cell where every plane's inside half-space overlaps.
///
/// Every plane triple with a unique intersection is a candidate; candidates
/// outside any plane are dropped and points closer than the distance tolerance
/// to an earlier corner are merged. Unbounded cells yield only the corners that
/// exist.
pub fn cell_vertices(planes: &[Plane]) -> Vec<Point3<f32>> {
    cell_vertices_with_tolerance(planes, &Tolerance::default())
}

/// [`cell_vertices`] with explicit tolerances.
pub fn cell_vertices_with_tolerance(planes: &[Plane], tolerance: &Tolerance) -> Vec<Point3<f32>> {
    let mut corners: Vec<Point3<f32>> = Vec::new();

    for i in 0..planes.len() {
        for j in i + 1..planes.len() {
            for k in j + 1..planes.len() {
                let Some(point) = Plane::try_intersection_with_epsilon(
                    &planes[i],
                    &planes[j],
                    &planes[k],
                    tolerance.normal,
                ) else {
                    continue;
                };

                let contained = planes.iter().all(|plane| {
                    tolerance.classify(plane.signed_distance(point)) != PlaneSide::Outside
                });
                if !contained {
                    continue;
                }

                let duplicate = corners
                    .iter()
                    .any(|corner| nalgebra::distance(corner, &point) <= tolerance.distance);
                if !duplicate {
                    corners.push(point);
                }
            }
        }
    }

    debug!("{} planes bound a cell with {} corners", planes.len(), corners.len());
    corners
}
