use crate::math::{Point, Real};

/// A center together with a non-negative radius.
///
/// A placement describes both a solution of the inscription problem (the
/// pattern scaled by `radius` and translated to `center`) and an
/// axis-aligned cube (with half side `radius`).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Placement {
    /// The center of this placement.
    pub center: Point<Real>,
    /// The scale of the pattern, or the half side of the cube.
    pub radius: Real,
}

impl Placement {
    /// Creates a new placement.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Self {
        debug_assert!(radius >= 0.0, "A placement radius cannot be negative.");
        Self { center, radius }
    }
}
