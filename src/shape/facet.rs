//! Triangles and tetrahedra given by their vertices.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::utils;
use arrayvec::ArrayVec;

/// A triangle of a boundary mesh.
pub type Facet = [Point<Real>; DIM];

/// A tetrahedron.
pub type Simplex = [Point<Real>; DIM + 1];

/// A vertex, an edge or a triangle given by its points.
pub type Face = ArrayVec<Point<Real>, DIM>;

/// The bounding box of a facet.
#[inline]
pub fn facet_aabb(facet: &Facet) -> Aabb {
    Aabb::from_points(facet.iter().copied())
}

/// The unit normal of `facet` oriented away from the origin.
///
/// For a facet of a mesh star-shaped around the origin this is the outward normal.
pub fn outside_normal(facet: &Facet) -> Vector<Real> {
    let normal = utils::unit_normal(facet);

    if normal.dot(&facet[0].coords) < 0.0 {
        -normal
    } else {
        normal
    }
}

/// A point lying just outside of `facet`, above its centroid.
///
/// It is shifted from the facet plane by twice the tolerance along
/// [`outside_normal`].
pub fn outer_point(facet: &Facet) -> Point<Real> {
    utils::center(facet) + outside_normal(facet) * (2.0 * DEFAULT_EPSILON)
}
