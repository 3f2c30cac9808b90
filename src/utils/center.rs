use crate::math::{Point, Real};

/// The centroid of the vertices of a facet or simplex.
///
/// The centroid of no point is the origin.
///
/// ```
/// use inscribe3d::math::Point;
/// use inscribe3d::utils::center;
///
/// let c = center(&[
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(3.0, 0.0, 0.0),
///     Point::new(0.0, 3.0, 3.0),
/// ]);
/// assert_eq!(c, Point::new(1.0, 1.0, 1.0));
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    if pts.is_empty() {
        return Point::origin();
    }

    let sum = pts
        .iter()
        .fold(Point::origin(), |acc, pt| acc + pt.coords);
    sum / pts.len() as Real
}
