use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{location_in_face, Location};

/// A triangle on the boundary of an [`IncrementalHull`](super::IncrementalHull).
///
/// The vertices are ordered counter-clockwise when seen from outside the hull,
/// so `normal` points outward.
#[derive(Clone, Debug)]
pub struct HullFace {
    /// Indices of the vertices of this face in the hull point buffer.
    pub pts: [usize; 3],
    /// Unit outward normal, zero for a degenerate face.
    pub normal: Vector<Real>,
    /// Are the three vertices collinear?
    pub affinely_dependent: bool,
}

impl HullFace {
    pub(crate) fn new(p1: usize, p2: usize, p3: usize, points: &[Point<Real>]) -> Self {
        let p1p2 = points[p2] - points[p1];
        let p1p3 = points[p3] - points[p1];
        let normal = p1p2.cross(&p1p3);
        let affinely_dependent =
            normal.norm() <= DEFAULT_EPSILON * p1p2.norm() * p1p3.norm();

        Self {
            pts: [p1, p2, p3],
            normal: normal.try_normalize(0.0).unwrap_or_else(Vector::zeros),
            affinely_dependent,
        }
    }

    /// Signed distance from the plane of this face to `pt`, positive outside.
    #[inline]
    pub fn distance_to_point(&self, pt: &Point<Real>, points: &[Point<Real>]) -> Real {
        self.normal.dot(&(pt - points[self.pts[0]]))
    }

    /// Is `pt` strictly above the plane of this face?
    ///
    /// An affinely-dependent face cannot see any point.
    #[inline]
    pub fn can_see_point(&self, pt: &Point<Real>, points: &[Point<Real>]) -> bool {
        !self.affinely_dependent && self.distance_to_point(pt, points) > DEFAULT_EPSILON
    }

    /// Does the orthogonal projection of `pt` on the plane of this face fall
    /// inside this face?
    pub fn contains_projection(&self, pt: &Point<Real>, points: &[Point<Real>]) -> bool {
        if self.affinely_dependent {
            return false;
        }

        let a = points[self.pts[0]];
        let ab = points[self.pts[1]] - a;
        let ac = points[self.pts[2]] - a;
        let ap = pt - a;

        let d00 = ab.dot(&ab);
        let d01 = ab.dot(&ac);
        let d11 = ac.dot(&ac);
        let d20 = ap.dot(&ab);
        let d21 = ap.dot(&ac);
        let denom = d00 * d11 - d01 * d01;

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;

        location_in_face(&[v, w]) != Location::Outer
    }

    /// The directed edges of this face.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [
            (self.pts[0], self.pts[1]),
            (self.pts[1], self.pts[2]),
            (self.pts[2], self.pts[0]),
        ]
    }
}
