use crate::grid::rasterization::PolytopeRasterizer;
use crate::grid::{Mapper, SparseRaster};
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::sat::FacetBoxOverlap;
use crate::query::Location;
use crate::shape::Facet;
use crate::solver::SolverStats;
use crate::transformation::{MinkowskiSum, MinkowskiSumPart};
use crate::utils::unit_normal;

/// Strategies classifying voxels against one convex part of a Minkowski sum.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConvexPartRasterizer {
    /// Rasterizes the part boundary, then its interior.
    Polytope(PolytopeRasterizer),
    /// Intersects the half-spaces bounded by the part facets.
    ///
    /// Faster, but voxels near part edges may be classified
    /// [`Location::Boundary`] without touching the part.
    Halfspaces,
}

impl Default for ConvexPartRasterizer {
    fn default() -> Self {
        ConvexPartRasterizer::Polytope(PolytopeRasterizer::default())
    }
}

impl ConvexPartRasterizer {
    /// Classifies the voxels of `raster`, all [`Location::Outer`], against `part`.
    pub fn rasterize(
        &self,
        part: &MinkowskiSumPart,
        mapper: &Mapper,
        raster: &mut SparseRaster<Location>,
    ) {
        match self {
            ConvexPartRasterizer::Polytope(rasterizer) => {
                let facets: Vec<Facet> = part
                    .facets()
                    .map(|facet| mapper.to_local_facet(&facet))
                    .collect();
                rasterizer.rasterize(&facets, raster);
            }
            ConvexPartRasterizer::Halfspaces => rasterize_part_by_halfspaces(part, mapper, raster),
        }
    }
}

/// Classifies voxels against the union of the parts of a Minkowski sum.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct MinkowskiSumRasterizer {
    /// The classification against each convex part.
    pub part_rasterizer: ConvexPartRasterizer,
}

impl MinkowskiSumRasterizer {
    /// Classifies the voxels of `raster`, all [`Location::Outer`], against the
    /// sum at the given scale.
    ///
    /// Each part only looks at the voxels not yet known to be inside of the sum.
    pub fn rasterize(
        &self,
        sum: &MinkowskiSum,
        scale: Real,
        mapper: &Mapper,
        raster: &mut SparseRaster<Location>,
        stats: &mut SolverStats,
    ) {
        for part in sum.convex_parts(scale) {
            let remaining = raster
                .voxels()
                .iter()
                .filter(|voxel| voxel.value != Location::Inner)
                .map(|voxel| *voxel.coordinates());
            let mut image = SparseRaster::from_selection(remaining, Location::Outer);

            if image.is_empty() {
                break;
            }

            stats.geometry_elements.report(part.facets().len());
            self.part_rasterizer.rasterize(&part, mapper, &mut image);
            combine_images(raster, &image);
        }
    }
}

/// Merges `image` into `target`, keeping the highest location of each voxel.
///
/// Voxels of `image` missing from `target` are ignored.
pub fn combine_images(target: &mut SparseRaster<Location>, image: &SparseRaster<Location>) {
    let mut others = image.voxels().iter().peekable();

    for voxel in target.voxels_mut() {
        while others
            .next_if(|other| other.coordinates() < voxel.coordinates())
            .is_some()
        {}

        if let Some(other) = others.next_if(|other| other.coordinates() == voxel.coordinates()) {
            voxel.value = voxel.value.max(other.value);
        }
    }
}

/// Classifies the voxels of `raster` against the intersection of the
/// half-spaces bounded by the facets of `part`.
///
/// Each facet plane is oriented away from the base facet of the part, or from
/// its inner direction if the base facet lies in that plane. Voxels entirely
/// beyond some plane are [`Location::Outer`], voxels crossed by some plane are
/// [`Location::Boundary`], the others are [`Location::Inner`].
pub fn rasterize_part_by_halfspaces(
    part: &MinkowskiSumPart,
    mapper: &Mapper,
    raster: &mut SparseRaster<Location>,
) {
    for voxel in raster.voxels_mut() {
        voxel.value = Location::Inner;
    }

    let base_facet = mapper.to_local_facet(part.base_facet());
    let unit_box = Vector::repeat(1.0);

    for facet in part.facets() {
        let facet = mapper.to_local_facet(&facet);
        let mut normal = unit_normal(&facet);
        let mut offset = normal.dot(&facet[0].coords);

        let inner_offset = base_facet
            .iter()
            .map(|pt| normal.dot(&pt.coords) - offset)
            .find(|inner_offset| inner_offset.abs() >= DEFAULT_EPSILON)
            .unwrap_or_else(|| normal.dot(part.inner_direction()));

        if inner_offset > 0.0 {
            normal = -normal;
            offset = -offset;
        }

        let lowest = FacetBoxOverlap::lowest_point(&unit_box, &normal);
        let thickness = normal.abs().sum();

        for voxel in raster.voxels_mut() {
            if voxel.value == Location::Outer {
                continue;
            }

            let corner = Point::from(voxel.coordinates().map(|c| c as Real)) + lowest.coords;
            let distance = normal.dot(&corner.coords) - offset;

            if distance > DEFAULT_EPSILON {
                voxel.value = Location::Outer;
            } else if distance + thickness > -DEFAULT_EPSILON {
                voxel.value = Location::Boundary;
            }
        }
    }
}
