//! Drawing helpers for the plane viewer.

use macroquad::models::{Mesh, Vertex, draw_mesh};
use macroquad::prelude::*;
use nalgebra::Point3;
use occluder_plane::{Aabb, Plane, PlaneSide};

pub mod camera;
pub use camera::OrbitCamera;

/// Converts a nalgebra point into macroquad's vector type.
#[inline]
pub fn to_vec3(point: Point3<f32>) -> Vec3 {
    vec3(point.x, point.y, point.z)
}

/// Display color for a classification result.
pub fn side_color(side: PlaneSide) -> Color {
    match side {
        PlaneSide::Inside => Color::from_rgba(80, 200, 120, 255),
        PlaneSide::Outside => Color::from_rgba(220, 80, 80, 255),
        PlaneSide::Intersects => Color::from_rgba(240, 200, 60, 255),
    }
}

/// Draws a square of half-size `extent` lying on `plane`, plus its normal.
///
/// The quad is built in the reference frame (normal `+Y`) and moved into place
/// with [`Plane::to_placement_transform`].
pub fn draw_plane(plane: &Plane, extent: f32, color: Color) {
    let placement = plane.to_placement_transform();
    let corners = [
        Point3::new(-extent, 0.0, -extent),
        Point3::new(extent, 0.0, -extent),
        Point3::new(extent, 0.0, extent),
        Point3::new(-extent, 0.0, extent),
    ]
    .map(|corner| to_vec3(placement * corner));

    let vertices = corners
        .iter()
        .map(|p| Vertex::new2(*p, vec2(0.0, 0.0), color))
        .collect();

    // both windings, so the quad shows from either side
    let mesh = Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3, 0, 2, 1, 0, 3, 2],
        texture: None,
    };
    draw_mesh(&mesh);

    for i in 0..corners.len() {
        draw_line_3d(corners[i], corners[(i + 1) % corners.len()], WHITE);
    }

    let center = placement * Point3::origin();
    let tip = center + plane.normal() * extent * 0.5;
    draw_line_3d(to_vec3(center), to_vec3(tip), WHITE);
}

/// Draws a wireframe box colored by `side`.
pub fn draw_aabb(bounds: &Aabb, side: PlaneSide) {
    let size = bounds.max - bounds.min;
    draw_cube_wires(to_vec3(bounds.center()), vec3(size.x, size.y, size.z), side_color(side));
}
