//! Plane primitive for occlusion and spatial-partitioning decisions.
//!
//! A [`Plane`] splits space into an *inside* (negative signed distance) and an
//! *outside* (positive signed distance) half-space. Points, boxes and boxes in
//! motion are classified with [`PlaneSide`]; three planes can be intersected to
//! recover a cell corner, and a crossing edge can be interpolated to find a
//! split point.
//!
//! ```
//! use nalgebra::Point3;
//! use occluder_plane::{Plane, PlaneSide};
//!
//! let floor = Plane::from_points(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(1.0, 0.0, 0.0),
//! );
//! assert_eq!(floor.classify_point(Point3::new(0.0, 2.0, 0.0)), PlaneSide::Outside);
//! ```

mod aabb;
pub mod cell;
mod error;
mod intersection;
mod placement;
mod plane;
mod polygon;
mod side;
pub mod tolerance;
mod triangle;

pub use aabb::Aabb;
pub use error::PlaneError;
pub use intersection::{NO_INTERSECTION, is_sentinel};
pub use placement::rotation_arc;
pub use plane::Plane;
pub use polygon::{Polygon, Split};
pub use side::{Classification, PlaneSide};
pub use tolerance::{DISTANCE_EPSILON, NORMAL_EPSILON, Tolerance};
pub use triangle::Triangle;
