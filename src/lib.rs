/*!
inscribe3d
==========

**inscribe3d** finds the largest uniformly scaled copy of a *pattern* mesh
that fits, by translation only, inside a *contour* mesh.

Both meshes are closed triangulated boundaries. The pattern must be
star-shaped around the origin. Two global search strategies are provided: an
exact branch-and-bound over a Lipschitz-bounded objective and an adaptive
multi-resolution voxel search built on parametric Minkowski sums.

```rust
use inscribe3d::math::Vector;
use inscribe3d::shape::Polytope;
use inscribe3d::solver::{BranchAndBoundInscriber, Inscriber, StopPredicate};

let pattern = Polytope::cuboid("pattern", Vector::repeat(0.5));
let contour = Polytope::cuboid("contour", Vector::repeat(0.5));
let stop = StopPredicate::with_precision(1.0e-3).unwrap();
let solution = BranchAndBoundInscriber::default().inscribe(&pattern, &contour, &stop);
assert!((solution.radius - 1.0).abs() < 1.0e-2);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod grid;
pub mod query;
pub mod shape;
pub mod solver;
pub mod transformation;
pub mod utils;

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use na::{Matrix3, Point3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The tolerance used by every geometric predicate of this crate.
    pub const DEFAULT_EPSILON: Real = 5.0e-11;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// Integer coordinates of a voxel in a lattice.
    ///
    /// Arrays compare lexicographically, which is the order sparse rasters
    /// keep their voxels in.
    pub type Coordinates = [i32; DIM];
}
