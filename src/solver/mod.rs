//! Searches for the largest scaled copy of a pattern fitting in a contour.
//!
//! Two global searches are provided, both driven by the same loop through the
//! [`IterativeInscriber`] trait:
//! * [`BranchAndBoundInscriber`] splits boxes of candidate centers and bounds
//!   the [`Objective`] over each of them with its Lipschitz constant.
//! * [`GraphicInscriber`] classifies voxels of an adaptive grid as feasible
//!   or not for increasing scales, using Minkowski sums of the contour facets
//!   with the inverted pattern.
//!
//! [`ExternalInscriber`] plugs any other global maximizer of the objective
//! into the same [`Inscriber`] interface.

pub use self::branch_and_bound::{
    BranchAndBoundInscriber, BranchAndBoundIteration, ObjectiveBounder, Region, ValueBounds,
};
pub use self::external::{search_domain, ExternalInscriber, GlobalMaximizer};
pub use self::graphic::{GraphicInscriber, GraphicIteration};
pub use self::inscriber::{Inscriber, InscriberKind, Iteration, IterativeInscriber};
pub use self::objective::{lipschitz_constant, InscribedRadius, Objective};
pub use self::stats::{SolverStats, ValueStats};
pub use self::stop_predicate::{StopPredicate, StopPredicateError};

mod branch_and_bound;
mod external;
pub mod graphic;
mod inscriber;
mod objective;
mod stats;
mod stop_predicate;
