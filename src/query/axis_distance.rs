use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::{location_in_face, Location};
use crate::shape::{facet_aabb, Facet};

/// The crossing of the upward vertical ray starting at a point with a facet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisDistanceResult {
    /// Signed distance from the ray origin to the crossing, along `+z`.
    pub value: Real,
    /// Location of the crossing inside of the facet.
    pub location: Location,
}

impl AxisDistanceResult {
    /// A ray that does not cross the facet.
    pub const MISS: Self = Self {
        value: -1.0,
        location: Location::Outer,
    };

    /// Creates a new crossing.
    #[inline]
    pub fn new(value: Real, location: Location) -> Self {
        Self { value, location }
    }

    /// Does the ray actually cross the facet?
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.location.is_hit()
    }

    /// Are both crossings at the same place up to the tolerance?
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.location == other.location && (self.value - other.value).abs() < DEFAULT_EPSILON
    }
}

/// Distance from points to a facet along the `z` axis.
///
/// The intersection of the vertical ray with the facet plane is expressed in
/// the affine basis of the facet (Möller–Trumbore), so the system is
/// factorized once per facet and solved once per query point.
#[derive(Clone, Debug)]
pub struct AxisDistance {
    aabb: Aabb,
    facet: Facet,
    origin: Point<Real>,
    // `None` for vertical facets: they are skipped since the boundary is closed.
    inverse: Option<Matrix<Real>>,
}

impl AxisDistance {
    /// Prepares distance queries to `facet`.
    pub fn new(facet: &Facet) -> Self {
        let e1 = facet[1] - facet[0];
        let e2 = facet[2] - facet[0];
        let system = Matrix::from_columns(&[-Vector::z(), e1, e2]);

        // The determinant is the vertical component of the facet normal.
        let rank_deficient = system.determinant().abs() <= DEFAULT_EPSILON * e1.norm() * e2.norm();
        let inverse = if rank_deficient {
            None
        } else {
            system.try_inverse()
        };

        Self {
            aabb: facet_aabb(facet),
            facet: *facet,
            origin: facet[0],
            inverse,
        }
    }

    /// The crossing of the vertical ray starting at `from` with the facet.
    ///
    /// Returns [`AxisDistanceResult::MISS`] if the horizontal projection of
    /// `from` lies outside the facet bounding box, or if the facet is vertical.
    pub fn eval(&self, from: &Point<Real>) -> AxisDistanceResult {
        if !self.aabb.contains_projection(from, &[0, 1], 0.0) {
            return AxisDistanceResult::MISS;
        }

        let inverse = match &self.inverse {
            Some(inverse) => inverse,
            None => return AxisDistanceResult::MISS,
        };

        let solution = inverse * (from - self.origin);
        AxisDistanceResult::new(solution[0], location_in_face(&[solution[1], solution[2]]))
    }

    /// The crossing of the vertical ray starting at `from` with the facet,
    /// where a ray touching the facet boundary is shifted aside.
    ///
    /// The shift is an infinitesimal horizontal move along a fixed direction
    /// that is not axis-aligned: a ray through an edge or a vertex then crosses
    /// the facet inside or misses it. Every crossing reported is
    /// [`Location::Inner`]. Facets sharing an edge take the same decision for
    /// it, so a ray crosses a closed boundary an odd number of times exactly
    /// when it starts inside, without merging any crossing.
    pub fn eval_shifted(&self, from: &Point<Real>) -> AxisDistanceResult {
        if !self.aabb.contains_projection(from, &[0, 1], DEFAULT_EPSILON) {
            return AxisDistanceResult::MISS;
        }

        let inverse = match &self.inverse {
            Some(inverse) => inverse,
            None => return AxisDistanceResult::MISS,
        };

        let enters = (0..DIM).all(|i| {
            let (a, b, c) = (&self.facet[i], &self.facet[(i + 1) % DIM], &self.facet[(i + 2) % DIM]);
            // Both facets of an edge see its endpoints in the same order.
            let (p, q) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };
            let edge = q - p;
            let inside = orientation(&edge, &(c - p)) > 0.0;

            let side = orientation(&edge, &(from - p));
            let side = if side.abs() > DEFAULT_EPSILON * edge.xy().norm() {
                side
            } else {
                let [primary, secondary] = SHIFT_DIRECTIONS.map(|[x, y]| orientation(&edge, &Vector::new(x, y, 0.0)));
                if primary.abs() > DEFAULT_EPSILON * secondary.abs() {
                    primary
                } else {
                    secondary
                }
            };

            (side > 0.0) == inside
        });

        if enters {
            let solution = inverse * (from - self.origin);
            AxisDistanceResult::new(solution[0], Location::Inner)
        } else {
            AxisDistanceResult::MISS
        }
    }
}

// Orthogonal, and away from the axes and the diagonals.
const SHIFT_DIRECTIONS: [[Real; 2]; 2] = [[0.6, 0.8], [-0.8, 0.6]];

// Orientation of `v` relative to `edge`, in the horizontal plane.
#[inline]
fn orientation(edge: &Vector<Real>, v: &Vector<Real>) -> Real {
    edge.x * v.y - edge.y * v.x
}
