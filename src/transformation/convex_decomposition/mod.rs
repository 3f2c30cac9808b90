//! Decomposition of star-shaped polytopes into convex parts.
//!
//! Every decomposition returns parts containing the origin, whose union is the
//! decomposed solid. None of them check that the polytope is star-shaped
//! around the origin (or convex, for [`ConvexDecompositor::Identity`]).
//!
//! # Example
//!
//! ```
//! use inscribe3d::math::Vector;
//! use inscribe3d::shape::Polytope;
//! use inscribe3d::transformation::ConvexDecompositor;
//!
//! let cube = Polytope::cuboid("cube", Vector::repeat(0.5));
//! let parts = ConvexDecompositor::FloodFill.decompose(&cube);
//!
//! // A convex polytope is not split.
//! assert_eq!(parts.len(), 1);
//! assert_eq!(parts[0].vertices.len(), 9);
//! ```

pub use self::convex_part_builder::ConvexPartBuilder;
pub use self::flood_fill::flood_fill_decomposition;

use crate::math::{Point, Real};
use crate::shape::{FacetIndex, Polytope};

mod convex_part_builder;
mod flood_fill;

/// A convex part of a decomposed polytope.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPart {
    /// The vertices whose convex hull is this part.
    pub vertices: Vec<Point<Real>>,
    /// The facets of the decomposed polytope covered by this part.
    pub facets: Vec<FacetIndex>,
}

/// The available convex decomposition algorithms.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ConvexDecompositor {
    /// A single part made of all the vertices, for convex polytopes.
    Identity,
    /// One tetrahedron per facet, joining the facet to the origin.
    StarFan,
    /// Parts grown over adjacent facets while they stay convex.
    #[default]
    FloodFill,
}

impl ConvexDecompositor {
    /// Splits `polytope` into convex parts.
    pub fn decompose(&self, polytope: &Polytope) -> Vec<ConvexPart> {
        match self {
            ConvexDecompositor::Identity => identity_decomposition(polytope),
            ConvexDecompositor::StarFan => star_decomposition(polytope),
            ConvexDecompositor::FloodFill => flood_fill_decomposition(polytope),
        }
    }
}

/// The whole polytope as a single part.
pub fn identity_decomposition(polytope: &Polytope) -> Vec<ConvexPart> {
    vec![ConvexPart {
        vertices: polytope.vertices().to_vec(),
        facets: (0..polytope.num_facets()).collect(),
    }]
}

/// One part per facet: the tetrahedron joining the origin to that facet.
pub fn star_decomposition(polytope: &Polytope) -> Vec<ConvexPart> {
    polytope
        .facets()
        .iter()
        .enumerate()
        .map(|(facet_id, facet)| ConvexPart {
            vertices: vec![Point::origin(), facet[0], facet[1], facet[2]],
            facets: vec![facet_id],
        })
        .collect()
}
