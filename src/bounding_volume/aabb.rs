//! Axis-aligned boxes enclosing facets and polytopes.

use crate::math::{Point, Real, Vector};
use crate::shape::Placement;

/// An axis-aligned box given by its lowest and highest corners.
///
/// ```rust
/// use inscribe3d::bounding_volume::Aabb;
/// use inscribe3d::math::Point;
///
/// let aabb = Aabb::from_points([
///     Point::new(1.0, 2.0, 3.0),
///     Point::new(-1.0, 4.0, 2.0),
///     Point::new(0.0, 0.0, 5.0),
/// ]);
///
/// assert_eq!(aabb.mins, Point::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point::new(1.0, 4.0, 5.0));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The lowest coordinates along each axis.
    pub mins: Point<Real>,
    /// The highest coordinates along each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// The box spanned by two corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// The box of the given center, extending by `half_extents` on both sides.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The smallest box enclosing `pts`.
    ///
    /// The bounds are infinite and inverted if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        pts.into_iter().fold(
            Self::new(
                Point::from(Vector::repeat(Real::INFINITY)),
                Point::from(Vector::repeat(Real::NEG_INFINITY)),
            ),
            |aabb, pt| Self::new(aabb.mins.inf(&pt), aabb.maxs.sup(&pt)),
        )
    }

    /// The center.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The side lengths.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Whether `point` lies within `eps` of this box once both are projected
    /// on the given coordinate axes.
    #[inline]
    pub fn contains_projection(&self, point: &Point<Real>, axes: &[usize], eps: Real) -> bool {
        axes.iter()
            .all(|i| point[*i] >= self.mins[*i] - eps && point[*i] <= self.maxs[*i] + eps)
    }

    /// The smallest cube sharing its center with this box and containing it.
    ///
    /// The cube is returned as a [`Placement`] whose radius is half its side.
    #[inline]
    pub fn bounding_cube(&self) -> Placement {
        Placement::new(self.center(), self.extents().max() * 0.5)
    }
}
