use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};

/// The non-normalized normal `(b - a) × (c - a)` of a triangle.
#[inline]
pub fn facet_normal(facet: &[Point<Real>; 3]) -> Vector<Real> {
    (facet[1] - facet[0]).cross(&(facet[2] - facet[0]))
}

/// The unit normal of a triangle.
///
/// Its orientation follows the order of the triangle vertices. Degenerate
/// triangles yield the zero vector.
#[inline]
pub fn unit_normal(facet: &[Point<Real>; 3]) -> Vector<Real> {
    facet_normal(facet)
        .try_normalize(0.0)
        .unwrap_or_else(Vector::zeros)
}

/// A direction orthogonal to every edge of two faces with four points in total.
///
/// The edges are taken from the first point of each face. When those edges do not
/// span a plane, any direction orthogonal to all of them is returned.
pub fn common_perpendicular(lhs: &[Point<Real>], rhs: &[Point<Real>]) -> Vector<Real> {
    debug_assert_eq!(lhs.len() + rhs.len(), 4);

    let mut edges = lhs
        .iter()
        .skip(1)
        .map(|p| p - lhs[0])
        .chain(rhs.iter().skip(1).map(|p| p - rhs[0]));
    let (e1, e2) = match (edges.next(), edges.next()) {
        (Some(e1), Some(e2)) => (e1, e2),
        _ => return Vector::x(),
    };

    let cross = e1.cross(&e2);
    if cross.norm() > DEFAULT_EPSILON * e1.norm() * e2.norm() {
        return cross;
    }

    // The edges are parallel (or zero): take any direction orthogonal to the longest one.
    let longest = if e1.norm_squared() >= e2.norm_squared() {
        e1
    } else {
        e2
    };

    if longest.norm() <= DEFAULT_EPSILON {
        return Vector::x();
    }

    let axis = longest.iamin();
    let mut other = Vector::zeros();
    other[axis] = 1.0;
    longest.cross(&other)
}
