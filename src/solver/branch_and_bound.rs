use super::{Iteration, IterativeInscriber, Objective, SolverStats};
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::sat::FacetBoxOverlap;
use crate::shape::{Placement, Polytope};
use crate::utils::WeightedValue;
use std::collections::BinaryHeap;

/// An axis-aligned box of candidate centers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    /// The center of the box.
    pub center: Point<Real>,
    /// The full extents of the box.
    pub size: Vector<Real>,
}

impl Region {
    /// Creates a new region.
    #[inline]
    pub fn new(center: Point<Real>, size: Vector<Real>) -> Self {
        Self { center, size }
    }

    /// The corner of this region with the smallest coordinates.
    #[inline]
    pub fn lower_corner(&self) -> Point<Real> {
        self.center - self.size * 0.5
    }
}

/// Bounds of the objective over a [`Region`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueBounds {
    /// A value reached inside of the region.
    pub lower: Real,
    /// A value no point of the region exceeds.
    pub upper: Real,
}

impl ValueBounds {
    /// Creates new bounds.
    #[inline]
    pub fn new(lower: Real, upper: Real) -> Self {
        Self { lower, upper }
    }
}

/// Strategies bounding the objective over a region.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ObjectiveBounder {
    /// The value at the center and the Lipschitz bound over the half diagonal.
    Simple,
    /// Like [`ObjectiveBounder::Simple`], but regions crossing no contour facet
    /// around an outer center get the exact bounds `[0, 0]`.
    #[default]
    Combined,
}

impl ObjectiveBounder {
    /// Bounds `objective` over `region`, evaluating it once.
    pub fn bound(&self, objective: &Objective, region: &Region) -> ValueBounds {
        let value = objective.eval(&region.center);
        let simple = ValueBounds::new(
            value,
            value + 0.5 * objective.lipschitz_constant() * region.size.norm(),
        );

        match self {
            ObjectiveBounder::Simple => simple,
            ObjectiveBounder::Combined => {
                if value >= DEFAULT_EPSILON {
                    return simple;
                }

                let lower_corner = region.lower_corner();
                let crosses_boundary = objective
                    .contour()
                    .facets()
                    .iter()
                    .any(|facet| FacetBoxOverlap::new(region.size, *facet).overlaps(&lower_corner));

                if crosses_boundary {
                    simple
                } else {
                    ValueBounds::new(0.0, 0.0)
                }
            }
        }
    }
}

/// An exact search splitting the candidate centers into boxes, keeping the
/// boxes whose objective bounds may still beat the best known solution.
///
/// Boxes are split in three along their longest side; the one with the
/// highest upper bound is split first.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct BranchAndBoundInscriber {
    /// How the objective is bounded over each box.
    pub bounder: ObjectiveBounder,
}

#[derive(Copy, Clone, Debug)]
struct Subproblem {
    region: Region,
    bounds: ValueBounds,
}

/// The state of a [`BranchAndBoundInscriber`] search.
#[derive(Clone, Debug)]
pub struct BranchAndBoundIteration<'a> {
    objective: Objective<'a>,
    subproblems: BinaryHeap<WeightedValue<Subproblem>>,
    solution: Placement,
    precision: Real,
}

impl BranchAndBoundIteration<'_> {
    /// The number of boxes left to explore.
    #[inline]
    pub fn num_subproblems(&self) -> usize {
        self.subproblems.len()
    }

    fn push(&mut self, subproblem: Subproblem) {
        self.subproblems
            .push(WeightedValue::new(subproblem, subproblem.bounds.upper));
    }
}

impl Iteration for BranchAndBoundIteration<'_> {
    fn precision(&self) -> Real {
        self.precision
    }

    fn solution(&self) -> Placement {
        self.solution
    }
}

impl BranchAndBoundInscriber {
    /// Creates a search bounding the objective with `bounder`.
    pub fn new(bounder: ObjectiveBounder) -> Self {
        Self { bounder }
    }

    // The middle child is not evaluated: its bounds are interpolated from the
    // parent ones, whose center it shares.
    fn branch(
        &self,
        problem: &Subproblem,
        objective: &Objective,
        stats: &mut SolverStats,
    ) -> [Subproblem; 3] {
        let size = problem.region.size;
        let axis = size.imax();
        let length = size[axis] / 3.0;
        let mut child_size = size;
        child_size[axis] = length;

        [-length, 0.0, length].map(|offset| {
            let region = Region::new(
                problem.region.center + Vector::ith(axis, offset),
                child_size,
            );

            let bounds = if offset == 0.0 {
                let lower = problem.bounds.lower;
                ValueBounds::new(
                    lower,
                    lower + (problem.bounds.upper - lower) * child_size.norm() / size.norm(),
                )
            } else {
                stats.objective_calls += 1;
                self.bounder.bound(objective, &region)
            };

            Subproblem { region, bounds }
        })
    }
}

impl IterativeInscriber for BranchAndBoundInscriber {
    type Iteration<'a> = BranchAndBoundIteration<'a>;

    fn init<'a>(
        &self,
        pattern: &'a Polytope,
        contour: &'a Polytope,
        _target_precision: Real,
        stats: &mut SolverStats,
    ) -> BranchAndBoundIteration<'a> {
        let objective = Objective::new(pattern, contour);
        stats.geometry_elements.report(objective.inscribed_radius().num_systems());

        let container = contour.aabb().bounding_cube();
        let region = Region::new(
            container.center,
            Vector::repeat(container.radius * 2.0),
        );
        stats.objective_calls += 1;
        let bounds = self.bounder.bound(&objective, &region);

        let mut result = BranchAndBoundIteration {
            objective,
            subproblems: BinaryHeap::new(),
            solution: Placement::new(region.center, bounds.lower),
            precision: bounds.upper - bounds.lower,
        };
        result.push(Subproblem { region, bounds });
        result
    }

    fn iterate(&self, it: &mut BranchAndBoundIteration<'_>, stats: &mut SolverStats) {
        stats.sampling_size.report(it.subproblems.len());

        let problem = match it.subproblems.pop() {
            Some(problem) => problem.value,
            None => {
                it.precision = 0.0;
                return;
            }
        };

        for child in self.branch(&problem, &it.objective, stats) {
            if child.bounds.upper < it.solution.radius {
                continue;
            }

            if child.bounds.lower > it.solution.radius {
                it.solution = Placement::new(child.region.center, child.bounds.lower);
            }

            it.push(child);
        }

        it.precision = it
            .subproblems
            .peek()
            .map(|top| top.value.bounds.upper - it.solution.radius)
            .unwrap_or(0.0);
    }
}
