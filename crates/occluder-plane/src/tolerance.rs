//! Numeric tolerances shared by the plane queries.

use crate::PlaneSide;

/// Threshold below which a determinant or normal magnitude counts as zero.
pub const NORMAL_EPSILON: f32 = 1e-6;

/// Default half-width of the band around a plane that classifies as
/// [`PlaneSide::Intersects`].
pub const DISTANCE_EPSILON: f32 = 1e-5;

/// A pair of tolerances for callers that classify with non-default values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Near-zero threshold for determinants and normal magnitudes.
    pub normal: f32,
    /// Classification band around the plane.
    pub distance: f32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            normal: NORMAL_EPSILON,
            distance: DISTANCE_EPSILON,
        }
    }
}

impl Tolerance {
    /// Creates a tolerance pair.
    pub fn new(normal: f32, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Classifies a signed distance against this tolerance's distance band.
    #[inline]
    pub fn classify(&self, distance: f32) -> PlaneSide {
        PlaneSide::classify(distance, Some(self.distance))
    }
}
