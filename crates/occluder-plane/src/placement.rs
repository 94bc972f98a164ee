//! Export of a plane as a rigid placement, for drawing plane-aligned geometry.

use std::f32::consts::PI;

use nalgebra::{Isometry3, Matrix4, Point3, Translation3, Unit, UnitQuaternion, Vector3};

use crate::Plane;

/// Shortest rotation taking direction `from` onto direction `to`.
///
/// Opposite directions get a half turn about an axis orthogonal to `from`.
/// A zero vector on either side gives the identity.
pub fn rotation_arc(from: &Vector3<f32>, to: &Vector3<f32>) -> UnitQuaternion<f32> {
    UnitQuaternion::rotation_between(from, to).unwrap_or_else(|| {
        let axis = from.cross(&Vector3::x());
        let axis = if axis.norm_squared() > f32::EPSILON {
            axis
        } else {
            from.cross(&Vector3::y())
        };
        UnitQuaternion::from_axis_angle(&Unit::new_normalize(axis), PI)
    })
}

impl Plane {
    /// Rigid transform placing the reference plane (normal `+Y`, through the
    /// origin) onto this plane.
    ///
    /// The rotation is the arc from `+Y` to the normal. The translation is the
    /// local point `(0, d, 0)` carried through that rotation, so for a unit
    /// normal the reference origin lands on [`Plane::point_on_plane`].
    pub fn to_placement_transform(&self) -> Isometry3<f32> {
        let rotation = rotation_arc(&Vector3::y(), &self.normal());
        let center = rotation * Point3::new(0.0, self.d, 0.0);
        Isometry3::from_parts(Translation3::from(center.coords), rotation)
    }

    /// [`Plane::to_placement_transform`] as a homogeneous matrix.
    pub fn to_placement_matrix(&self) -> Matrix4<f32> {
        self.to_placement_transform().to_homogeneous()
    }
}
