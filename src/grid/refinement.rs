//! Zooming and subdivision of samplings.

use crate::grid::{Mapper, Sampling, SparseRaster};
use crate::math::{Coordinates, Point, Real, DEFAULT_EPSILON, DIM};
use crate::query::Location;
use crate::shape::Placement;
use crate::utils::{int_floor, int_floor_point, LatticeBox};

/// The number of children of a voxel along each axis after [`refine`].
pub const REFINEMENT_SCALE: i32 = 2;

/// The smallest cube aligned with voxel boundaries enclosing the given voxels.
///
/// The cube has integer center and radius, so that it can be split into a
/// whole number of voxels on each side of its center.
pub fn voxels_bounding_box(selection: &[Coordinates]) -> Placement {
    debug_assert!(!selection.is_empty());
    let mut min = [i32::MAX; DIM];
    let mut max = [i32::MIN; DIM];

    for coordinates in selection {
        for i in 0..DIM {
            min[i] = min[i].min(coordinates[i]);
            max[i] = max[i].max(coordinates[i]);
        }
    }

    let mut radius = 0;
    let mut center = Point::origin();
    for i in 0..DIM {
        max[i] += 1;
        if (max[i] - min[i]) % 2 != 0 {
            max[i] += 1;
        }

        center[i] = (min[i] + max[i]) as Real / 2.0;
        radius = radius.max((max[i] - min[i]) / 2);
    }

    Placement::new(center, radius as Real)
}

/// Zooms on the voxels of `sampling` that are not [`Location::Outer`].
///
/// The resulting lattice has the same step and covers the bounding cube of
/// these voxels, which are kept as [`Location::Boundary`]. An empty selection
/// yields an empty sampling over the same lattice.
pub fn shrink(sampling: &Sampling) -> Sampling {
    let selection: Vec<_> = sampling
        .raster()
        .voxels()
        .iter()
        .filter(|voxel| voxel.value.is_hit())
        .map(|voxel| *voxel.coordinates())
        .collect();

    if selection.is_empty() {
        return Sampling::new(*sampling.mapper(), SparseRaster::default());
    }

    let local_container = voxels_bounding_box(&selection);
    let grid_size = int_floor(local_container.radius * 2.0);
    let mapper = Mapper::new(
        sampling.mapper().to_global_cube(&local_container),
        grid_size as u32,
    );

    debug_assert!(
        (mapper.grid_step() - sampling.mapper().grid_step()).abs() < DEFAULT_EPSILON,
        "Voxels of the shrunk grid must match the original ones."
    );
    debug_assert!(grid_size % 2 == 0);

    let center = int_floor_point(&local_container.center);
    let offset = center.map(|c| c - grid_size / 2);
    let selection = selection.into_iter().map(|coordinates| {
        let result = [
            coordinates[0] - offset[0],
            coordinates[1] - offset[1],
            coordinates[2] - offset[2],
        ];
        debug_assert!(mapper.contains(&result));
        result
    });

    Sampling::new(
        mapper,
        SparseRaster::from_selection(selection, Location::Boundary),
    )
}

/// Splits the voxels of `sampling` that are not [`Location::Outer`] into
/// `REFINEMENT_SCALE³` smaller voxels each, marked [`Location::Boundary`].
///
/// Outer voxels are dropped. The lattice keeps its container.
pub fn refine(sampling: &Sampling) -> Sampling {
    let children = [REFINEMENT_SCALE; DIM];
    let mut selection =
        Vec::with_capacity(sampling.len() * LatticeBox::capacity(children));

    for voxel in sampling.raster().voxels() {
        if !voxel.value.is_hit() {
            continue;
        }

        let origin = voxel.coordinates().map(|c| c * REFINEMENT_SCALE);
        selection.extend(LatticeBox::new(origin, children));
    }

    let mapper = Mapper::new(
        *sampling.mapper().container(),
        sampling.mapper().grid_size() * REFINEMENT_SCALE as u32,
    );

    Sampling::new(
        mapper,
        SparseRaster::from_selection(selection, Location::Boundary),
    )
}
