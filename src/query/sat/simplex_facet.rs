use crate::math::{DEFAULT_EPSILON, DIM};
use crate::query::Location;
use crate::shape::{Facet, Simplex};
use crate::utils::{self, Subsets};

use super::project_on_axis;

/// Overlap test between a tetrahedron and triangles.
///
/// The candidate separating axes are the directions orthogonal to a `k`-face
/// of the tetrahedron and a `(2 - k)`-face of the triangle.
#[derive(Copy, Clone, Debug)]
pub struct SimplexFacetOverlap<'a> {
    simplex: &'a Simplex,
}

impl<'a> SimplexFacetOverlap<'a> {
    /// Prepares overlap tests against `simplex`.
    #[inline]
    pub fn new(simplex: &'a Simplex) -> Self {
        Self { simplex }
    }

    /// Does the tetrahedron overlap `facet`?
    ///
    /// Returns [`Location::Outer`] if some axis separates them,
    /// [`Location::Boundary`] if they only touch within the tolerance, and
    /// [`Location::Inner`] if they overlap.
    pub fn test(&self, facet: &Facet) -> Location {
        let mut result = Location::Inner;

        for simplex_face_dim in 0..DIM {
            for simplex_face in Subsets::new(DIM + 1, simplex_face_dim + 1) {
                let simplex_face = Subsets::select(self.simplex, &simplex_face);

                for facet_face in Subsets::new(DIM, DIM - simplex_face_dim) {
                    let facet_face = Subsets::select(facet, &facet_face);
                    let axis = utils::common_perpendicular(&simplex_face, &facet_face);
                    let (simplex_min, simplex_max) = project_on_axis(self.simplex, &axis);
                    let (facet_min, facet_max) = project_on_axis(facet, &axis);

                    if simplex_max < facet_min - DEFAULT_EPSILON
                        || facet_max < simplex_min - DEFAULT_EPSILON
                    {
                        return Location::Outer;
                    } else if simplex_max < facet_min + DEFAULT_EPSILON
                        || facet_max < simplex_min + DEFAULT_EPSILON
                    {
                        result = Location::Boundary;
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod test {
    use super::SimplexFacetOverlap;
    use crate::math::Point;
    use crate::query::Location;

    fn unit_simplex() -> [Point<f64>; 4] {
        [
            Point::origin(),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn simplex_touching_its_own_face() {
        let simplex = [
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, -0.562018),
            Point::new(0.0, 1.0, -0.562018),
            Point::new(-0.5, 0.5, -0.314237),
        ];
        let facet = [simplex[1], simplex[2], simplex[3]];
        assert_eq!(SimplexFacetOverlap::new(&simplex).test(&facet), Location::Boundary);
    }

    #[test]
    fn crossing_facet_overlaps() {
        let simplex = unit_simplex();
        let facet = [
            Point::new(0.1, 0.1, -1.0),
            Point::new(0.1, 0.1, 1.0),
            Point::new(-1.0, 0.1, 0.1),
        ];
        assert_eq!(SimplexFacetOverlap::new(&simplex).test(&facet), Location::Inner);
    }

    #[test]
    fn distant_facet_is_separated() {
        let simplex = unit_simplex();
        let facet = [
            Point::new(2.0, 2.0, 2.0),
            Point::new(3.0, 2.0, 2.0),
            Point::new(2.0, 3.0, 2.0),
        ];
        assert_eq!(SimplexFacetOverlap::new(&simplex).test(&facet), Location::Outer);

        // Separated only by an edge-edge axis.
        let facet = [
            Point::new(0.6, 0.6, -0.5),
            Point::new(0.6, 0.6, 0.5),
            Point::new(2.0, 2.0, 0.0),
        ];
        assert_eq!(SimplexFacetOverlap::new(&simplex).test(&facet), Location::Outer);
    }
}
