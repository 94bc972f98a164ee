//! Half-space classification results.

use crate::tolerance::DISTANCE_EPSILON;

/// Which half-space of a plane a point (or box corner) lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// Within the epsilon band around the plane.
    Intersects,
    /// Negative side of the normal, the 'inside' half-space.
    Inside,
    /// Positive side of the normal, the 'outside' half-space.
    Outside,
}

impl PlaneSide {
    /// Classifies a signed distance.
    ///
    /// `epsilon` is the half-width of the band that counts as on the plane;
    /// `None` uses [`DISTANCE_EPSILON`].
    #[inline]
    pub fn classify(distance: f32, epsilon: Option<f32>) -> Self {
        let epsilon = epsilon.unwrap_or(DISTANCE_EPSILON);
        if distance > epsilon {
            PlaneSide::Outside
        } else if distance < -epsilon {
            PlaneSide::Inside
        } else {
            PlaneSide::Intersects
        }
    }

    /// The side a point would be on if the plane were negated.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            PlaneSide::Inside => PlaneSide::Outside,
            PlaneSide::Outside => PlaneSide::Inside,
            PlaneSide::Intersects => PlaneSide::Intersects,
        }
    }
}

/// Classification of a polygon or triangle against a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Every vertex is inside or on the plane, at least one strictly inside.
    Inside,
    /// Every vertex is outside or on the plane, at least one strictly outside.
    Outside,
    /// Every vertex lies on the plane.
    Coplanar,
    /// Vertices on both sides.
    Spanning,
}

impl Classification {
    /// Folds per-vertex sides into a single classification.
    pub(crate) fn from_sides(sides: impl IntoIterator<Item = PlaneSide>) -> Self {
        let mut inside = 0;
        let mut outside = 0;

        for side in sides {
            match side {
                PlaneSide::Inside => inside += 1,
                PlaneSide::Outside => outside += 1,
                PlaneSide::Intersects => {}
            }
        }

        match (inside, outside) {
            (0, 0) => Classification::Coplanar,
            (_, 0) => Classification::Inside,
            (0, _) => Classification::Outside,
            _ => Classification::Spanning,
        }
    }
}
