use super::{BranchAndBoundInscriber, GraphicInscriber, SolverStats, StopPredicate};
use crate::math::Real;
use crate::shape::{Placement, Polytope};
use std::time::Instant;

/// A search for the largest scaled copy of a pattern fitting in a contour.
pub trait Inscriber {
    /// Finds the center and the scale of the largest copy of `pattern` fitting
    /// inside of `contour`, recording measurements in `stats`.
    ///
    /// The pattern must be star-shaped around the origin.
    fn inscribe_with_stats(
        &self,
        pattern: &Polytope,
        contour: &Polytope,
        stop: &StopPredicate,
        stats: &mut SolverStats,
    ) -> Placement;

    /// Finds the center and the scale of the largest copy of `pattern` fitting
    /// inside of `contour`.
    fn inscribe(&self, pattern: &Polytope, contour: &Polytope, stop: &StopPredicate) -> Placement {
        let mut stats = SolverStats::default();
        self.inscribe_with_stats(pattern, contour, stop, &mut stats)
    }
}

/// The state of an iterative search.
pub trait Iteration {
    /// An upper bound of the distance between the optimal radius and the
    /// radius of the current solution.
    fn precision(&self) -> Real;
    /// The best placement found so far.
    fn solution(&self) -> Placement;
}

/// A search improving its solution step by step.
///
/// Every type implementing this trait is an [`Inscriber`]: the search is
/// iterated until the stop predicate is satisfied.
pub trait IterativeInscriber {
    /// The state of the search.
    type Iteration<'a>: Iteration;

    /// Starts a search.
    fn init<'a>(
        &self,
        pattern: &'a Polytope,
        contour: &'a Polytope,
        target_precision: Real,
        stats: &mut SolverStats,
    ) -> Self::Iteration<'a>;

    /// Improves the solution or the precision of a search.
    fn iterate(&self, iteration: &mut Self::Iteration<'_>, stats: &mut SolverStats);
}

impl<T: IterativeInscriber> Inscriber for T {
    fn inscribe_with_stats(
        &self,
        pattern: &Polytope,
        contour: &Polytope,
        stop: &StopPredicate,
        stats: &mut SolverStats,
    ) -> Placement {
        let start = Instant::now();
        let mut iteration = self.init(pattern, contour, stop.target_precision(), stats);
        let mut result = iteration.solution();

        while !stop.is_satisfied(
            iteration.precision(),
            iteration.solution().radius,
            start.elapsed(),
        ) {
            self.iterate(&mut iteration, stats);

            // A step finishing past the deadline does not count.
            if start.elapsed() >= stop.max_duration() {
                break;
            }

            result = iteration.solution();
            stats.steps += 1;
            log::debug!(
                "Step {}: radius {}, precision {}.",
                stats.steps,
                result.radius,
                iteration.precision()
            );
        }

        log::info!(
            "Inscribed {} into {} with radius {} after {} steps ({:?}).",
            pattern.name(),
            contour.name(),
            result.radius,
            stats.steps,
            start.elapsed()
        );

        result
    }
}

/// The built-in searches.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InscriberKind {
    /// See [`BranchAndBoundInscriber`].
    BranchAndBound(BranchAndBoundInscriber),
    /// See [`GraphicInscriber`].
    Graphic(GraphicInscriber),
}

impl Default for InscriberKind {
    fn default() -> Self {
        InscriberKind::BranchAndBound(BranchAndBoundInscriber::default())
    }
}

impl Inscriber for InscriberKind {
    fn inscribe_with_stats(
        &self,
        pattern: &Polytope,
        contour: &Polytope,
        stop: &StopPredicate,
        stats: &mut SolverStats,
    ) -> Placement {
        match self {
            InscriberKind::BranchAndBound(inscriber) => {
                inscriber.inscribe_with_stats(pattern, contour, stop, stats)
            }
            InscriberKind::Graphic(inscriber) => {
                inscriber.inscribe_with_stats(pattern, contour, stop, stats)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Inscriber, InscriberKind, Iteration, IterativeInscriber};
    use crate::math::{Point, Real, Vector};
    use crate::shape::{Placement, Polytope};
    use crate::solver::{SolverStats, StopPredicate};
    use std::time::Duration;

    // Halves its precision and bumps its radius at each step.
    struct Halving {
        step_duration: Duration,
    }

    struct HalvingIteration {
        precision: Real,
        radius: Real,
    }

    impl Iteration for HalvingIteration {
        fn precision(&self) -> Real {
            self.precision
        }

        fn solution(&self) -> Placement {
            Placement::new(Point::origin(), self.radius)
        }
    }

    impl IterativeInscriber for Halving {
        type Iteration<'a> = HalvingIteration;

        fn init<'a>(
            &self,
            _: &'a Polytope,
            _: &'a Polytope,
            _: Real,
            _: &mut SolverStats,
        ) -> HalvingIteration {
            HalvingIteration {
                precision: 1.0,
                radius: 0.0,
            }
        }

        fn iterate(&self, it: &mut HalvingIteration, _: &mut SolverStats) {
            std::thread::sleep(self.step_duration);
            it.precision /= 2.0;
            it.radius += 1.0;
        }
    }

    #[test]
    fn driver_stops_at_target_precision() {
        let cube = Polytope::cuboid("cube", Vector::repeat(1.0));
        let stop = StopPredicate::with_precision(0.1).unwrap();
        let mut stats = SolverStats::default();
        let inscriber = Halving {
            step_duration: Duration::ZERO,
        };
        let solution = inscriber.inscribe_with_stats(&cube, &cube, &stop, &mut stats);

        // 1/16 is the first power of two below 0.1.
        assert_eq!(stats.steps, 4);
        assert_eq!(solution.radius, 4.0);
    }

    #[test]
    fn driver_stops_at_target_value() {
        let cube = Polytope::cuboid("cube", Vector::repeat(1.0));
        let stop = StopPredicate::new(None, Some(2.5), None).unwrap();
        let inscriber = Halving {
            step_duration: Duration::ZERO,
        };
        assert_eq!(inscriber.inscribe(&cube, &cube, &stop).radius, 3.0);
    }

    #[test]
    fn late_steps_are_discarded() {
        let cube = Polytope::cuboid("cube", Vector::repeat(1.0));
        let stop = StopPredicate::new(None, None, Some(Duration::from_millis(200))).unwrap();
        let mut stats = SolverStats::default();
        let inscriber = Halving {
            step_duration: Duration::from_millis(120),
        };
        let solution = inscriber.inscribe_with_stats(&cube, &cube, &stop, &mut stats);

        // The second step ends after 240ms.
        assert_eq!(stats.steps, 1);
        assert_eq!(solution.radius, 1.0);
    }

    #[test]
    fn default_kind_is_exact() {
        let pattern = Polytope::cuboid("pattern", Vector::repeat(0.5));
        let contour = Polytope::cuboid("contour", Vector::repeat(0.75));
        let stop = StopPredicate::with_precision(1.0e-3).unwrap();
        let solution = InscriberKind::default().inscribe(&pattern, &contour, &stop);
        assert_relative_eq!(solution.radius, 1.5, epsilon = 1.0e-3);
    }
}
