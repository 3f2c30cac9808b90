//! Classification of the voxels of a sparse raster against triangulated solids.
//!
//! Rasterizers work in the local coordinates of a lattice, where the voxel
//! `c` is the unit cube `[c, c + 1]`. They only ever raise voxel values
//! (`Outer < Boundary < Inner`) so several passes can be chained.

pub use self::facet_rasterizer::FacetRasterizer;
pub use self::inner_region::InnerRegionRasterizer;
pub use self::polytope_rasterizer::PolytopeRasterizer;

mod facet_rasterizer;
mod inner_region;
mod polytope_rasterizer;
