//! Adaptive voxel search of the pattern centers.
//!
//! The pattern fits in the contour at the scale `s` and the center `c` iff
//! `c` lies inside of the contour and outside of the Minkowski sums of the
//! contour facets with the inverted pattern scaled by `s`. Voxels where it fits
//! everywhere are found for increasing scales; when none is found, the radius
//! step is halved and the voxels are split.

pub use self::accuracy_estimator::AccuracyEstimator;
pub use self::domain_estimator::DomainEstimator;
pub use self::minkowski_sum_rasterizer::{
    combine_images, rasterize_part_by_halfspaces, ConvexPartRasterizer, MinkowskiSumRasterizer,
};

use super::{lipschitz_constant, Iteration, IterativeInscriber, SolverStats};
use crate::grid::rasterization::PolytopeRasterizer;
use crate::grid::{refine, shrink, Sampling};
use crate::math::{Real, DIM};
use crate::query::Location;
use crate::shape::{Placement, Polytope};
use crate::transformation::{ConvexDecompositor, MinkowskiSum};

mod accuracy_estimator;
mod domain_estimator;
mod minkowski_sum_rasterizer;

/// The number of voxels along each axis of the first grid.
pub const INITIAL_GRID_SIZE: u32 = 8;
/// The first radius step, relative to the first grid step.
pub const RADIUS_STEP_RATIO: Real = 1.0;

/// A search of the feasible centers on a voxel grid refined on demand.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct GraphicInscriber {
    /// The decomposition of the inverted pattern into convex parts.
    pub decompositor: ConvexDecompositor,
    /// The classification of voxels against the Minkowski sum.
    pub sum_rasterizer: MinkowskiSumRasterizer,
    /// The classification of voxels against the contour.
    pub contour_rasterizer: PolytopeRasterizer,
    /// The estimation of the precision after a failed step.
    pub accuracy: AccuracyEstimator,
}

/// The state of a [`GraphicInscriber`] search.
#[derive(Clone, Debug)]
pub struct GraphicIteration<'a> {
    contour: &'a Polytope,
    sum: MinkowskiSum,
    sampling: Sampling,
    solution: Placement,
    precision: Real,
    radius_step: Real,
    grid_lipschitz_constant: Real,
    target_precision: Real,
}

impl GraphicIteration<'_> {
    /// The voxels that may still contain better centers.
    #[inline]
    pub fn sampling(&self) -> &Sampling {
        &self.sampling
    }

    /// The radius increment tested by the next step.
    #[inline]
    pub fn radius_step(&self) -> Real {
        self.radius_step
    }
}

impl Iteration for GraphicIteration<'_> {
    fn precision(&self) -> Real {
        self.precision
    }

    fn solution(&self) -> Placement {
        self.solution
    }
}

impl IterativeInscriber for GraphicInscriber {
    type Iteration<'a> = GraphicIteration<'a>;

    fn init<'a>(
        &self,
        pattern: &'a Polytope,
        contour: &'a Polytope,
        target_precision: Real,
        stats: &mut SolverStats,
    ) -> GraphicIteration<'a> {
        let parts = self.decompositor.decompose(&pattern.inverted());
        let sum = MinkowskiSum::new(contour, &parts);
        stats.pattern_convex_parts = parts.len();
        stats.minkowski_templates = sum.num_templates();

        let container = contour.aabb().bounding_cube();
        let sampling = Sampling::filled(container, INITIAL_GRID_SIZE, Location::Boundary);
        let radius_step = sampling.mapper().grid_step() * RADIUS_STEP_RATIO;

        log::debug!(
            "Inscribing {} ({} convex parts) into {} ({} Minkowski sum templates).",
            pattern.name(),
            parts.len(),
            contour.name(),
            sum.num_templates()
        );

        GraphicIteration {
            contour,
            sum,
            sampling,
            solution: Placement::new(container.center, 0.0),
            precision: container.radius,
            radius_step,
            grid_lipschitz_constant: lipschitz_constant(pattern) * (DIM as Real).sqrt(),
            target_precision,
        }
    }

    fn iterate(&self, it: &mut GraphicIteration<'_>, stats: &mut SolverStats) {
        stats.grid_size.report(it.sampling.mapper().grid_size() as usize);
        stats.sampling_size.report(it.sampling.len());

        let domain = DomainEstimator::new(
            &it.sum,
            it.contour,
            &self.sum_rasterizer,
            &self.contour_rasterizer,
        );
        let radius = it.solution.radius + it.radius_step;
        let estimate = domain.estimate(&it.sampling, radius, stats);

        let last_feasible = estimate
            .raster()
            .voxels()
            .iter()
            .rev()
            .find(|voxel| voxel.value == Location::Inner);

        match last_feasible {
            Some(voxel) => {
                let center = it.sampling.mapper().to_global_coordinates(voxel.coordinates());
                it.solution = Placement::new(center, radius);
                it.sampling = shrink(&estimate);
            }
            None => {
                it.precision = self.accuracy.estimate(
                    &domain,
                    &it.sampling,
                    it.solution.radius,
                    it.radius_step,
                    it.target_precision,
                    it.grid_lipschitz_constant,
                    stats,
                );
                it.sampling = refine(&it.sampling);
                it.radius_step /= 2.0;
                log::debug!(
                    "No center fits with radius {}: refined to {} voxels.",
                    radius,
                    it.sampling.len()
                );
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{
        AccuracyEstimator, ConvexPartRasterizer, GraphicInscriber, MinkowskiSumRasterizer,
        INITIAL_GRID_SIZE,
    };
    use crate::math::{Point, Vector};
    use crate::shape::Polytope;
    use crate::solver::{Inscriber, Iteration, IterativeInscriber, SolverStats, StopPredicate};
    use crate::transformation::ConvexDecompositor;
    use std::time::Duration;

    #[test]
    fn first_iteration() {
        let pattern = Polytope::cuboid("pattern", Vector::repeat(0.5));
        let contour = Polytope::cuboid("contour", Vector::repeat(1.0));
        let inscriber = GraphicInscriber::default();
        let mut stats = SolverStats::default();
        let mut it = inscriber.init(&pattern, &contour, 1.0e-2, &mut stats);

        assert_eq!(stats.pattern_convex_parts, 1);
        assert_eq!(stats.minkowski_templates, 12);
        assert_eq!(it.sampling().mapper().grid_size(), INITIAL_GRID_SIZE);
        assert_eq!(it.precision(), 1.0);
        assert_eq!(it.radius_step(), 0.25);

        inscriber.iterate(&mut it, &mut stats);
        let solution = it.solution();
        assert_eq!(solution.radius, 0.25);
        assert!(solution.center.coords.amax() <= 0.875 + 1.0e-9);
        // Every voxel contains a feasible center.
        assert_eq!(it.sampling().len(), 512);
    }

    #[test]
    fn cube_in_cube() {
        let pattern = Polytope::cuboid("pattern", Vector::repeat(0.5));
        let contour = Polytope::cuboid("contour", Vector::repeat(0.5));
        let stop = StopPredicate::with_precision(2.0e-2)
            .unwrap()
            .with_max_duration(Duration::from_secs(120));

        for inscriber in [
            GraphicInscriber::default(),
            GraphicInscriber {
                decompositor: ConvexDecompositor::Identity,
                sum_rasterizer: MinkowskiSumRasterizer {
                    part_rasterizer: ConvexPartRasterizer::Halfspaces,
                },
                accuracy: AccuracyEstimator::General,
                ..Default::default()
            },
        ] {
            let mut stats = SolverStats::default();
            let solution = inscriber.inscribe_with_stats(&pattern, &contour, &stop, &mut stats);

            assert!(solution.radius <= 1.0 + 1.0e-9);
            assert!(solution.radius > 0.9);
            assert_relative_eq!(solution.center, Point::origin(), epsilon = 0.1);
            // Radii past 0.875 are only tested after failed steps.
            assert!(stats.steps > 8);
        }
    }
}
