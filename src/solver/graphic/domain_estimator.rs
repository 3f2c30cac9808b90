use super::MinkowskiSumRasterizer;
use crate::grid::rasterization::PolytopeRasterizer;
use crate::grid::{Sampling, SparseRaster};
use crate::math::Real;
use crate::query::Location;
use crate::shape::{Facet, Polytope};
use crate::solver::SolverStats;
use crate::transformation::MinkowskiSum;

/// Classifies the voxels of a sampling as sets of feasible pattern centers.
///
/// A voxel is [`Location::Inner`] if the pattern fits in the contour at every
/// center of the voxel, [`Location::Outer`] if it fits at none of them and
/// [`Location::Boundary`] otherwise.
#[derive(Copy, Clone, Debug)]
pub struct DomainEstimator<'a> {
    sum: &'a MinkowskiSum,
    contour: &'a Polytope,
    sum_rasterizer: &'a MinkowskiSumRasterizer,
    contour_rasterizer: &'a PolytopeRasterizer,
}

impl<'a> DomainEstimator<'a> {
    /// An estimator for the pattern whose inverted convex parts were summed
    /// into `sum` with the facets of `contour`.
    pub fn new(
        sum: &'a MinkowskiSum,
        contour: &'a Polytope,
        sum_rasterizer: &'a MinkowskiSumRasterizer,
        contour_rasterizer: &'a PolytopeRasterizer,
    ) -> Self {
        Self {
            sum,
            contour,
            sum_rasterizer,
            contour_rasterizer,
        }
    }

    /// Classifies every voxel of `sampling`, whatever its value, for the
    /// pattern scaled by `radius`.
    pub fn estimate(&self, sampling: &Sampling, radius: Real, stats: &mut SolverStats) -> Sampling {
        let mapper = *sampling.mapper();
        let mut result = SparseRaster::from_selection(sampling.raster().coordinates(), Location::Outer);
        let mut feasibility = result.clone();

        // Centers inside of the sum have the pattern crossing the contour boundary.
        self.sum_rasterizer
            .rasterize(self.sum, radius, &mapper, &mut result, stats);

        let facets: Vec<Facet> = self
            .contour
            .facets()
            .iter()
            .map(|facet| mapper.to_local_facet(facet))
            .collect();
        self.contour_rasterizer.rasterize(&facets, &mut feasibility);

        for (voxel, feasible) in result.voxels_mut().iter_mut().zip(feasibility.voxels()) {
            voxel.value = if voxel.value == Location::Inner || feasible.value == Location::Outer {
                Location::Outer
            } else if voxel.value == Location::Outer {
                Location::Inner
            } else {
                Location::Boundary
            };
        }

        Sampling::new(mapper, result)
    }
}

#[cfg(test)]
mod test {
    use super::DomainEstimator;
    use crate::grid::rasterization::PolytopeRasterizer;
    use crate::grid::Sampling;
    use crate::math::{Point, Real, Vector};
    use crate::query::Location;
    use crate::shape::{Placement, Polytope};
    use crate::solver::graphic::MinkowskiSumRasterizer;
    use crate::solver::{Objective, SolverStats};
    use crate::transformation::{ConvexDecompositor, MinkowskiSum};

    // Checks the classification of every voxel against the objective at its
    // corners, and returns the number of inner and outer voxels.
    fn check_domain(
        pattern: &Polytope,
        contour: &Polytope,
        container: Placement,
        radius: Real,
    ) -> (usize, usize) {
        let parts = ConvexDecompositor::FloodFill.decompose(&pattern.inverted());
        let sum = MinkowskiSum::new(contour, &parts);
        let sum_rasterizer = MinkowskiSumRasterizer::default();
        let contour_rasterizer = PolytopeRasterizer::default();
        let estimator = DomainEstimator::new(&sum, contour, &sum_rasterizer, &contour_rasterizer);

        let sampling = Sampling::filled(container, 8, Location::Boundary);
        let mut stats = SolverStats::default();
        let domain = estimator.estimate(&sampling, radius, &mut stats);
        assert_eq!(domain.len(), sampling.len());

        let objective = Objective::new(pattern, contour);
        let step = domain.mapper().grid_step();
        let (mut num_inner, mut num_outer) = (0, 0);

        for voxel in domain.raster().voxels() {
            let lower = domain.mapper().to_global_coordinates(voxel.coordinates());
            let values: Vec<Real> = [0.0, 1.0]
                .iter()
                .flat_map(|dx| {
                    [0.0, 1.0].iter().flat_map(move |dy| {
                        [0.0, 1.0].iter().map(move |dz| lower + Vector::new(*dx, *dy, *dz) * step)
                    })
                })
                .map(|corner| objective.eval(&corner))
                .collect();

            match voxel.value {
                Location::Inner => {
                    num_inner += 1;
                    assert!(values.iter().all(|v| *v >= radius - 1.0e-9), "{:?}", voxel);
                }
                Location::Outer => {
                    num_outer += 1;
                    assert!(values.iter().all(|v| *v <= radius + 1.0e-9), "{:?}: {:?}", voxel, values);
                }
                Location::Boundary => {}
            }
        }

        (num_inner, num_outer)
    }

    #[test]
    fn classification_matches_the_objective() {
        let pattern = Polytope::cuboid("pattern", Vector::repeat(0.5));
        let contour = Polytope::cuboid("contour", Vector::new(1.0, 0.8, 0.9));
        let container = Placement::new(Point::new(0.011, -0.007, 0.013), 1.0);

        // Feasible centers form the box [-0.65, 0.65] x [-0.45, 0.45] x [-0.55, 0.55].
        let (num_inner, _) = check_domain(&pattern, &contour, container, 0.7);
        assert!(num_inner > 0);
    }

    #[test]
    fn grid_aligned_with_the_contour() {
        // Voxel centers sit on the diagonals of the contour and sum facets.
        let pattern = Polytope::cuboid("pattern", Vector::repeat(0.5));
        let contour = Polytope::cuboid("contour", Vector::repeat(1.0));
        let container = contour.aabb().bounding_cube();

        // Every voxel holds a center of [-0.875, 0.875]³.
        let (num_inner, num_outer) = check_domain(&pattern, &contour, container, 0.25);
        assert!(num_inner > 0);
        assert_eq!(num_outer, 0);

        let (num_inner, num_outer) = check_domain(&pattern, &contour, container, 0.6);
        assert!(num_inner > 0);
        assert!(num_outer > 0);
    }
}
