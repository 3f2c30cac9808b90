//! Sparse adaptive voxel grids.
//!
//! A [`Sampling`] is a set of voxels of a regular lattice covering a cube,
//! each voxel being classified as outside, on the boundary of, or inside some
//! region. Searches zoom on the undetermined voxels with [`shrink`] and split
//! them with [`refine`].

pub use self::mapper::Mapper;
pub use self::refinement::{refine, shrink, voxels_bounding_box, REFINEMENT_SCALE};
pub use self::sampling::Sampling;
pub use self::sparse_raster::{SparseRaster, Voxel};

mod mapper;
pub mod rasterization;
mod refinement;
mod sampling;
mod sparse_raster;
