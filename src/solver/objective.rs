//! The inscribed radius, as a function of the pattern center.

use crate::math::{Matrix, Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::query::{locate_point, location_in_face, Location};
use crate::shape::{Face, Polytope};
use crate::utils::unit_normal;

// The intersection of a face of the scaled pattern with a contour face of
// complementary dimension.
//
// Writing the intersection point in the affine basis of both faces gives
// `p + s * (s0 + Σ a_i (s_i - s0)) = f0 + Σ b_j (f_j - f0)` where `p` is the
// pattern center and `s` the scale, i.e. the linear system
// `[s0 | s_i - s0 | f0 - f_j] * (s, s·a, b) = f0 - p`.
#[derive(Clone, Debug)]
struct IntersectionSystem {
    scaling_dim: usize,
    fixed_dim: usize,
    inverse: Matrix<Real>,
    rhs: Vector<Real>,
}

impl IntersectionSystem {
    // Singular systems mean either no intersection or intersections at every
    // scale, neither of which bounds the radius.
    fn new(scaling_face: &Face, fixed_face: &Face) -> Option<Self> {
        debug_assert_eq!(scaling_face.len() + fixed_face.len(), DIM + 1);
        let mut columns = [Vector::zeros(); DIM];

        columns[0] = scaling_face[0].coords;
        for i in 1..scaling_face.len() {
            columns[i] = scaling_face[i] - scaling_face[0];
        }
        for j in 1..fixed_face.len() {
            columns[scaling_face.len() + j - 1] = fixed_face[0] - fixed_face[j];
        }

        let system = Matrix::from_columns(&columns);
        let scale: Real = columns.iter().map(|c| c.norm()).product();
        if system.determinant().abs() <= DEFAULT_EPSILON * scale {
            return None;
        }

        Some(Self {
            scaling_dim: scaling_face.len() - 1,
            fixed_dim: fixed_face.len() - 1,
            inverse: system.try_inverse()?,
            rhs: fixed_face[0].coords,
        })
    }

    // The scale at which the faces intersect for a pattern centered at `center`.
    fn intersection_scale(&self, center: &Point<Real>) -> Option<Real> {
        let mut solution = self.inverse * (self.rhs - center.coords);
        let scale = solution[0];
        let scaling = 1..1 + self.scaling_dim;
        let fixed = 1 + self.scaling_dim..1 + self.scaling_dim + self.fixed_dim;

        if scale < -DEFAULT_EPSILON {
            return None;
        }

        if scale > DEFAULT_EPSILON {
            for i in scaling.clone() {
                solution[i] /= scale;
            }
            if location_in_face(&solution.as_slice()[scaling]) == Location::Outer {
                return None;
            }
        } else if solution.as_slice()[scaling]
            .iter()
            .any(|c| c.abs() > DEFAULT_EPSILON)
        {
            // The scaled face collapses onto the center, so the contour face
            // must go through it.
            return None;
        }

        if location_in_face(&solution.as_slice()[fixed]) == Location::Outer {
            return None;
        }

        Some(scale)
    }
}

/// The largest scale of a star-shaped pattern centered at a point that
/// keeps it inside of a contour.
///
/// This is the smallest scale at which some face of the pattern meets a face
/// of the contour of complementary dimension: vertices against facets, edges
/// against edges and facets against vertices.
#[derive(Clone, Debug)]
pub struct InscribedRadius {
    systems: Vec<IntersectionSystem>,
}

impl InscribedRadius {
    /// Prepares the evaluation of the inscribed radius of `pattern` in `contour`.
    ///
    /// The pattern must be star-shaped around the origin.
    pub fn new(pattern: &Polytope, contour: &Polytope) -> Self {
        let mut systems = Vec::new();

        for scaling_dim in 0..DIM {
            let fixed_faces = contour.faces(DIM - 1 - scaling_dim);
            for scaling_face in pattern.faces(scaling_dim) {
                systems.extend(
                    fixed_faces
                        .iter()
                        .filter_map(|fixed_face| IntersectionSystem::new(&scaling_face, fixed_face)),
                );
            }
        }

        Self { systems }
    }

    /// The number of face pairs that may bound the radius.
    #[inline]
    pub fn num_systems(&self) -> usize {
        self.systems.len()
    }

    /// The inscribed radius of the pattern centered at `center`.
    ///
    /// The center should lie inside of the contour, the result is zero if it
    /// lies on its boundary.
    pub fn eval(&self, center: &Point<Real>) -> Real {
        let mut result = None;

        for system in &self.systems {
            if let Some(scale) = system.intersection_scale(center) {
                if scale < DEFAULT_EPSILON {
                    return 0.0;
                }
                result = Some(result.map_or(scale, |r: Real| r.min(scale)));
            }
        }

        result.unwrap_or_else(|| {
            log::debug!("No face of the pattern ever meets the contour from {}.", center);
            0.0
        })
    }
}

/// An upper bound of the variation of the inscribed radius of `pattern` per
/// unit distance moved by its center.
///
/// Scaling the pattern by `1 / (n · f0)` moves the plane of the facet `f` by
/// one unit along its unit normal `n`.
pub fn lipschitz_constant(pattern: &Polytope) -> Real {
    pattern
        .facets()
        .iter()
        .map(|facet| (1.0 / unit_normal(facet).dot(&facet[0].coords)).abs())
        .fold(0.0, Real::max)
}

/// The inscribed radius extended by zero outside of the contour.
#[derive(Clone, Debug)]
pub struct Objective<'a> {
    radius: InscribedRadius,
    contour: &'a Polytope,
    lipschitz_constant: Real,
}

impl<'a> Objective<'a> {
    /// The objective of inscribing `pattern` into `contour`.
    pub fn new(pattern: &Polytope, contour: &'a Polytope) -> Self {
        Self {
            radius: InscribedRadius::new(pattern, contour),
            contour,
            lipschitz_constant: lipschitz_constant(pattern),
        }
    }

    /// The largest scale of the pattern fitting in the contour at `center`.
    pub fn eval(&self, center: &Point<Real>) -> Real {
        if locate_point(center, self.contour.facets()) == Location::Inner {
            self.radius.eval(center)
        } else {
            0.0
        }
    }

    /// The Lipschitz constant of this objective.
    #[inline]
    pub fn lipschitz_constant(&self) -> Real {
        self.lipschitz_constant
    }

    /// The container of the pattern.
    #[inline]
    pub fn contour(&self) -> &'a Polytope {
        self.contour
    }

    /// The inscribed radius this objective is made of.
    #[inline]
    pub fn inscribed_radius(&self) -> &InscribedRadius {
        &self.radius
    }
}
