use thiserror::Error;

/// Errors raised by fallible plane operations.
///
/// A degenerate three-plane intersection is not reported here; it is signalled
/// by the NaN sentinel point (see [`Plane::intersection`](crate::Plane::intersection)).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlaneError {
    /// The normal has zero (or non-finite) length and cannot be normalized.
    #[error("plane normal has degenerate magnitude {magnitude}")]
    DegenerateNormal {
        /// The offending magnitude of `(a, b, c)`.
        magnitude: f32,
    },
}
