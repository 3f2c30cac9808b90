use super::{Inscriber, Objective, SolverStats, StopPredicate};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{Placement, Polytope};
use std::time::Instant;

/// A global maximizer of a Lipschitz continuous function over a box.
///
/// Implementations typically wrap an external optimization library.
pub trait GlobalMaximizer {
    /// Searches the point of `bounds` maximizing `objective`.
    ///
    /// The returned placement holds the best point found and its value.
    fn maximize(
        &self,
        objective: &mut dyn FnMut(&Point<Real>) -> Real,
        bounds: &Aabb,
        lipschitz_constant: Real,
        stop: &StopPredicate,
    ) -> Placement;
}

/// The box of candidate pattern centers: the bounding cube of `contour`.
pub fn search_domain(contour: &Polytope) -> Aabb {
    let cube = contour.aabb().bounding_cube();
    Aabb::from_half_extents(cube.center, Vector::repeat(cube.radius))
}

/// Maximizes the inscribed radius with a [`GlobalMaximizer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct ExternalInscriber<M> {
    /// The maximizer of the objective.
    pub maximizer: M,
}

impl<M> ExternalInscriber<M> {
    /// Wraps a maximizer.
    pub fn new(maximizer: M) -> Self {
        Self { maximizer }
    }
}

impl<M: GlobalMaximizer> Inscriber for ExternalInscriber<M> {
    fn inscribe_with_stats(
        &self,
        pattern: &Polytope,
        contour: &Polytope,
        stop: &StopPredicate,
        stats: &mut SolverStats,
    ) -> Placement {
        let start = Instant::now();
        let objective = Objective::new(pattern, contour);
        stats
            .geometry_elements
            .report(objective.inscribed_radius().num_systems());

        let mut objective_calls = 0;
        let result = self.maximizer.maximize(
            &mut |center: &Point<Real>| {
                objective_calls += 1;
                objective.eval(center)
            },
            &search_domain(contour),
            objective.lipschitz_constant(),
            stop,
        );
        stats.objective_calls += objective_calls;

        log::info!(
            "Inscribed {} into {} with radius {} after {} evaluations ({:?}).",
            pattern.name(),
            contour.name(),
            result.radius,
            objective_calls,
            start.elapsed()
        );

        result
    }
}
