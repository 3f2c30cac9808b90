//! Geometric entities: triangulated solids, facets and placements.

pub use self::facet::{facet_aabb, outer_point, outside_normal, Face, Facet, Simplex};
pub use self::placement::Placement;
pub use self::polytope::{FacetIndex, Polytope, PolytopeError, VertexIndex};

pub mod facet;
mod placement;
mod polytope;
