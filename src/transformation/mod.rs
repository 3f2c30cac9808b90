//! Decomposition and Minkowski sums of polytopes.

pub use self::convex_decomposition::{
    flood_fill_decomposition, identity_decomposition, star_decomposition, ConvexDecompositor,
    ConvexPart, ConvexPartBuilder,
};
pub use self::minkowski_sum::{
    ConvexPartTemplate, MinkowskiSum, MinkowskiSumPart, VertexTemplate,
};
#[cfg(feature = "wavefront")]
pub use self::wavefront::ObjLoadError;

pub mod convex_decomposition;
pub mod incremental_hull;
mod minkowski_sum;

#[cfg(feature = "wavefront")]
mod wavefront;
