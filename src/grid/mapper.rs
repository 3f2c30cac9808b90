use crate::math::{Coordinates, Point, Real, Vector, DIM};
use crate::shape::{Facet, Placement};

/// Conversion between global coordinates and the local coordinates of a
/// regular cubic lattice.
///
/// The lattice covers the `container` cube with `grid_size` voxels along each
/// axis. In local coordinates the voxel with coordinates `c` is the unit cube
/// `[c, c + 1]`, and the container is `[0, grid_size]³`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mapper {
    container: Placement,
    grid_size: u32,
    grid_step: Real,
    local_center: Point<Real>,
}

impl Mapper {
    /// Creates a lattice of `grid_size³` voxels covering the `container` cube.
    pub fn new(container: Placement, grid_size: u32) -> Self {
        debug_assert!(grid_size > 0, "A grid must have at least one voxel.");
        let grid_size_real = grid_size as Real;

        Self {
            container,
            grid_size,
            grid_step: 2.0 * container.radius / grid_size_real,
            local_center: Point::from(Vector::repeat(grid_size_real / 2.0)),
        }
    }

    /// The cube covered by this lattice.
    #[inline]
    pub fn container(&self) -> &Placement {
        &self.container
    }

    /// The number of voxels along each axis.
    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// The global length of a voxel side.
    #[inline]
    pub fn grid_step(&self) -> Real {
        self.grid_step
    }

    /// The number of voxels along each axis, as coordinates.
    #[inline]
    pub fn raster_size(&self) -> Coordinates {
        [self.grid_size as i32; DIM]
    }

    /// Does this lattice contain the voxel with the given coordinates?
    #[inline]
    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        coordinates
            .iter()
            .all(|c| *c >= 0 && (*c as i64) < self.grid_size as i64)
    }

    /// Converts a global length into a local one.
    #[inline]
    pub fn to_local_distance(&self, distance: Real) -> Real {
        distance / self.grid_step
    }

    /// Converts a global point into local coordinates.
    #[inline]
    pub fn to_local_point(&self, point: &Point<Real>) -> Point<Real> {
        self.local_center + (point - self.container.center) / self.grid_step
    }

    /// Converts every vertex of a global facet into local coordinates.
    #[inline]
    pub fn to_local_facet(&self, facet: &Facet) -> Facet {
        facet.map(|pt| self.to_local_point(&pt))
    }

    /// Converts a local length into a global one.
    #[inline]
    pub fn to_global_distance(&self, distance: Real) -> Real {
        distance * self.grid_step
    }

    /// Converts a local point into global coordinates.
    #[inline]
    pub fn to_global_point(&self, point: &Point<Real>) -> Point<Real> {
        self.container.center + (point - self.local_center) * self.grid_step
    }

    /// The global position of the lower corner of a voxel.
    #[inline]
    pub fn to_global_coordinates(&self, coordinates: &Coordinates) -> Point<Real> {
        self.to_global_point(&Point::from(coordinates.map(|c| c as Real)))
    }

    /// Converts a local cube into a global one.
    #[inline]
    pub fn to_global_cube(&self, cube: &Placement) -> Placement {
        Placement::new(
            self.to_global_point(&cube.center),
            self.to_global_distance(cube.radius),
        )
    }
}
