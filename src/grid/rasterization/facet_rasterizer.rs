use crate::grid::SparseRaster;
use crate::math::{Point, Real, Vector, DIM};
use crate::query::sat::FacetBoxOverlap;
use crate::query::Location;
use crate::shape::{facet_aabb, Facet};
use crate::utils::{int_floor_point, LatticeBox};

/// Strategies marking the voxels crossed by a facet as [`Location::Boundary`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FacetRasterizer {
    /// Tests every voxel of the raster for overlap with the facet.
    Overlap,
    /// Only tests the voxels within the integer bounding box of the facet.
    ///
    /// Facets whose bounding box is smaller than `coarse_threshold` voxels
    /// mark their whole integer bounding box without further test.
    BoundingBox {
        /// The size below which a facet is rasterized coarsely.
        coarse_threshold: Real,
    },
}

impl Default for FacetRasterizer {
    fn default() -> Self {
        FacetRasterizer::BoundingBox {
            coarse_threshold: 2.0,
        }
    }
}

impl FacetRasterizer {
    /// Marks the voxels of `raster` crossed by the local facet `facet`.
    pub fn rasterize(&self, facet: &Facet, raster: &mut SparseRaster<Location>) {
        match self {
            FacetRasterizer::Overlap => rasterize_by_overlap(facet, raster, None),
            FacetRasterizer::BoundingBox { coarse_threshold } => {
                let aabb = facet_aabb(facet);
                let min = int_floor_point(&aabb.mins);
                let max = int_floor_point(&aabb.maxs);

                if aabb.extents().max() < *coarse_threshold {
                    let size = [
                        max[0] - min[0] + 1,
                        max[1] - min[1] + 1,
                        max[2] - min[2] + 1,
                    ];
                    for coordinates in LatticeBox::new(min, size) {
                        if let Some(voxel) = raster.find_mut(&coordinates) {
                            voxel.value = Location::Boundary;
                        }
                    }
                } else {
                    rasterize_by_overlap(facet, raster, Some((min, max)));
                }
            }
        }
    }
}

fn rasterize_by_overlap(
    facet: &Facet,
    raster: &mut SparseRaster<Location>,
    bounds: Option<([i32; DIM], [i32; DIM])>,
) {
    let overlap = FacetBoxOverlap::new(Vector::repeat(1.0), *facet);

    for voxel in raster.voxels_mut() {
        let coordinates = *voxel.coordinates();
        if let Some((min, max)) = &bounds {
            if (0..DIM).any(|i| coordinates[i] < min[i] || coordinates[i] > max[i]) {
                continue;
            }
        }

        if overlap.overlaps(&Point::from(coordinates.map(|c| c as Real))) {
            voxel.value = Location::Boundary;
        }
    }
}
