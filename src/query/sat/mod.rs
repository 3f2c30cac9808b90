//! Application of the Separating-Axis-Theorem (SAT).

pub use self::facet_box::FacetBoxOverlap;
pub use self::simplex_facet::SimplexFacetOverlap;

use crate::math::{Point, Real, Vector};

mod facet_box;
mod simplex_facet;

/// An affine function `direction · point + offset`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearTest {
    direction: Vector<Real>,
    offset: Real,
}

impl LinearTest {
    /// Creates the affine function `direction · point + offset`.
    #[inline]
    pub fn new(direction: Vector<Real>, offset: Real) -> Self {
        Self { direction, offset }
    }

    /// Evaluates this function at `point`.
    #[inline]
    pub fn eval(&self, point: &Point<Real>) -> Real {
        self.direction.dot(&point.coords) + self.offset
    }
}

/// The interval covered by the projection of `points` on `axis`.
pub(crate) fn project_on_axis<'a>(
    points: impl IntoIterator<Item = &'a Point<Real>>,
    axis: &Vector<Real>,
) -> (Real, Real) {
    points
        .into_iter()
        .fold((Real::MAX, Real::MIN), |(min, max), pt| {
            let proj = axis.dot(&pt.coords);
            (min.min(proj), max.max(proj))
        })
}
