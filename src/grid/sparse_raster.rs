use crate::math::{Coordinates, DIM};
use crate::utils::LatticeBox;

/// A voxel of a [`SparseRaster`]: integer coordinates with a value attached.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Voxel<T> {
    coordinates: Coordinates,
    /// The value attached to this voxel.
    pub value: T,
}

impl<T> Voxel<T> {
    /// Creates a new voxel.
    #[inline]
    pub fn new(coordinates: Coordinates, value: T) -> Self {
        Self { coordinates, value }
    }

    /// The coordinates of this voxel.
    #[inline]
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }
}

/// A set of voxels of a lattice, each with a value.
///
/// Voxels are kept sorted by their coordinates in lexicographic order, so
/// lookups are logarithmic and the voxels sharing their first two coordinates
/// (a vertical column) are contiguous. The coordinates of a voxel cannot be
/// changed once inserted, only its value.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SparseRaster<T> {
    voxels: Vec<Voxel<T>>,
}

impl<T: Clone> SparseRaster<T> {
    /// Creates a raster from the given coordinates, all with the same value.
    ///
    /// The coordinates may come in any order, and duplicates are merged.
    pub fn from_selection(selection: impl IntoIterator<Item = Coordinates>, value: T) -> Self {
        let mut voxels: Vec<_> = selection
            .into_iter()
            .map(|coordinates| Voxel::new(coordinates, value.clone()))
            .collect();
        voxels.sort_unstable_by_key(|voxel| voxel.coordinates);
        voxels.dedup_by_key(|voxel| voxel.coordinates);

        Self { voxels }
    }

    /// Creates a raster containing every voxel of the box `[0, raster_size)`.
    pub fn filled(raster_size: Coordinates, value: T) -> Self {
        let mut selection = Vec::with_capacity(LatticeBox::capacity(raster_size));
        selection.extend(LatticeBox::new([0; DIM], raster_size));
        Self::from_selection(selection, value)
    }
}

impl<T> SparseRaster<T> {
    /// The number of voxels of this raster.
    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Does this raster contain no voxel at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// The voxels of this raster, sorted by coordinates.
    #[inline]
    pub fn voxels(&self) -> &[Voxel<T>] {
        &self.voxels
    }

    /// The voxels of this raster, sorted by coordinates, with mutable values.
    #[inline]
    pub fn voxels_mut(&mut self) -> &mut [Voxel<T>] {
        &mut self.voxels
    }

    /// The coordinates of the voxels of this raster, in increasing order.
    pub fn coordinates(&self) -> impl ExactSizeIterator<Item = Coordinates> + '_ {
        self.voxels.iter().map(|voxel| voxel.coordinates)
    }

    fn position(&self, coordinates: &Coordinates) -> Result<usize, usize> {
        self.voxels
            .binary_search_by(|voxel| voxel.coordinates.cmp(coordinates))
    }

    /// The voxel with the given coordinates, if any.
    pub fn find(&self, coordinates: &Coordinates) -> Option<&Voxel<T>> {
        self.position(coordinates).ok().map(|i| &self.voxels[i])
    }

    /// The voxel with the given coordinates, if any.
    pub fn find_mut(&mut self, coordinates: &Coordinates) -> Option<&mut Voxel<T>> {
        self.position(coordinates).ok().map(|i| &mut self.voxels[i])
    }

    fn vertical_slice_range(&self, start: &Coordinates) -> std::ops::Range<usize> {
        let first = self.position(start).unwrap_or_else(|i| i);
        let len = self.voxels[first..]
            .iter()
            .take_while(|voxel| voxel.coordinates[..DIM - 1] == start[..DIM - 1])
            .count();
        first..first + len
    }

    /// The voxels sharing the first two coordinates of `start`, with a last
    /// coordinate not smaller than the one of `start`.
    pub fn vertical_slice(&self, start: &Coordinates) -> &[Voxel<T>] {
        let range = self.vertical_slice_range(start);
        &self.voxels[range]
    }

    /// The voxels sharing the first two coordinates of `start`, with a last
    /// coordinate not smaller than the one of `start`.
    pub fn vertical_slice_mut(&mut self, start: &Coordinates) -> &mut [Voxel<T>] {
        let range = self.vertical_slice_range(start);
        &mut self.voxels[range]
    }
}
