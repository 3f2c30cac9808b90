use crate::grid::SparseRaster;
use crate::math::{Coordinates, Point, Real, DEFAULT_EPSILON, DIM};
use crate::query::{classify_crossings, AxisDistance, AxisDistanceResult, Location};
use crate::shape::Facet;

/// Strategies classifying the [`Location::Outer`] voxels of a raster as inside
/// or outside of a closed boundary.
///
/// Each voxel is classified through the facets crossed by the upward vertical
/// ray starting at its center, shifted aside where it touches an edge (see
/// [`AxisDistance::eval_shifted`]): a crossing within the tolerance of the
/// center makes it [`Location::Boundary`], an odd number of crossings makes it
/// [`Location::Inner`]. All the strategies give the same result; they only
/// differ by the order in which facets and voxels are traversed.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum InnerRegionRasterizer {
    /// Locates each voxel independently.
    Sequential,
    /// Accumulates the crossings of every voxel facet by facet.
    ByFacets,
    /// Casts one ray per column of voxels and sweeps it upward.
    #[default]
    ByRays,
}

impl InnerRegionRasterizer {
    /// Classifies the outer voxels of `raster` against the local facets `facets`.
    pub fn rasterize(&self, facets: &[Facet], raster: &mut SparseRaster<Location>) {
        match self {
            InnerRegionRasterizer::Sequential => rasterize_sequentially(facets, raster),
            InnerRegionRasterizer::ByFacets => rasterize_by_facets(facets, raster),
            InnerRegionRasterizer::ByRays => rasterize_by_rays(facets, raster),
        }
    }
}

#[inline]
fn voxel_center(coordinates: &Coordinates) -> Point<Real> {
    Point::from(coordinates.map(|c| c as Real + 0.5))
}

fn crossing_above(distance: &AxisDistance, from: &Point<Real>) -> Option<AxisDistanceResult> {
    let result = distance.eval_shifted(from);
    (result.is_hit() && result.value > -DEFAULT_EPSILON).then_some(result)
}

// Shifted rays cross shared edges once, so coincident crossings are all kept.
fn sort_crossings(crossings: &mut [AxisDistanceResult]) {
    crossings.sort_by(|a, b| a.value.total_cmp(&b.value));
}

fn rasterize_sequentially(facets: &[Facet], raster: &mut SparseRaster<Location>) {
    let distances: Vec<_> = facets.iter().map(AxisDistance::new).collect();
    let mut crossings = Vec::new();

    for voxel in raster.voxels_mut() {
        if voxel.value != Location::Outer {
            continue;
        }

        let center = voxel_center(voxel.coordinates());
        crossings.clear();
        crossings.extend(distances.iter().filter_map(|d| crossing_above(d, &center)));
        sort_crossings(&mut crossings);
        voxel.value = classify_crossings(&crossings, 0.0);
    }
}

fn rasterize_by_facets(facets: &[Facet], raster: &mut SparseRaster<Location>) {
    let selection = raster
        .voxels()
        .iter()
        .filter(|voxel| voxel.value == Location::Outer)
        .map(|voxel| *voxel.coordinates());
    let mut crossings = SparseRaster::from_selection(selection, Vec::new());

    for facet in facets {
        let distance = AxisDistance::new(facet);
        for voxel in crossings.voxels_mut() {
            let center = voxel_center(voxel.coordinates());
            if let Some(crossing) = crossing_above(&distance, &center) {
                voxel.value.push(crossing);
            }
        }
    }

    for voxel in crossings.voxels_mut() {
        sort_crossings(&mut voxel.value);
        if let Some(target) = raster.find_mut(voxel.coordinates()) {
            target.value = classify_crossings(&voxel.value, 0.0);
        }
    }
}

fn rasterize_by_rays(facets: &[Facet], raster: &mut SparseRaster<Location>) {
    // Projections of the outer voxels on the plane z = 0.
    let columns = raster
        .voxels()
        .iter()
        .filter(|voxel| voxel.value == Location::Outer)
        .map(|voxel| {
            let mut coordinates = *voxel.coordinates();
            coordinates[DIM - 1] = 0;
            coordinates
        });
    let mut crossings = SparseRaster::from_selection(columns, Vec::new());

    for facet in facets {
        let distance = AxisDistance::new(facet);
        for column in crossings.voxels_mut() {
            let bottom = voxel_center(column.coordinates());
            if let Some(crossing) = crossing_above(&distance, &bottom) {
                column.value.push(crossing);
            }
        }
    }

    for column in crossings.voxels_mut() {
        sort_crossings(&mut column.value);

        for voxel in raster.vertical_slice_mut(column.coordinates()) {
            if voxel.value == Location::Outer {
                let height = voxel.coordinates()[DIM - 1] as Real;
                voxel.value = classify_crossings(&column.value, height);
            }
        }
    }
}
