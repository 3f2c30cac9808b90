use crate::grid::{Mapper, SparseRaster};
use crate::query::Location;
use crate::shape::Placement;

/// A sparse raster together with the lattice it lives in.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Sampling<T = Location> {
    mapper: Mapper,
    raster: SparseRaster<T>,
}

impl<T> Sampling<T> {
    /// Attaches a raster to a lattice.
    pub fn new(mapper: Mapper, raster: SparseRaster<T>) -> Self {
        debug_assert!(raster.coordinates().all(|c| mapper.contains(&c)));
        Self { mapper, raster }
    }

    /// The lattice of this sampling.
    #[inline]
    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    /// The voxels of this sampling.
    #[inline]
    pub fn raster(&self) -> &SparseRaster<T> {
        &self.raster
    }

    /// The voxels of this sampling.
    #[inline]
    pub fn raster_mut(&mut self) -> &mut SparseRaster<T> {
        &mut self.raster
    }

    /// The number of voxels of this sampling.
    #[inline]
    pub fn len(&self) -> usize {
        self.raster.len()
    }

    /// Does this sampling contain no voxel at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raster.is_empty()
    }

    /// Splits this sampling into its lattice and its voxels.
    pub fn into_parts(self) -> (Mapper, SparseRaster<T>) {
        (self.mapper, self.raster)
    }
}

impl<T: Clone> Sampling<T> {
    /// Every voxel of a `grid_size³` lattice covering `container`, all with the same value.
    pub fn filled(container: Placement, grid_size: u32, value: T) -> Self {
        let mapper = Mapper::new(container, grid_size);
        let raster = SparseRaster::filled(mapper.raster_size(), value);
        Self { mapper, raster }
    }
}
