use super::{FacetRasterizer, InnerRegionRasterizer};
use crate::grid::SparseRaster;
use crate::query::Location;
use crate::shape::Facet;

/// Classifies the voxels of a raster against a closed triangulated boundary.
///
/// The voxels crossed by a facet become [`Location::Boundary`], then the
/// remaining outer voxels are split between inside and outside.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PolytopeRasterizer {
    /// The rasterization of each facet.
    pub facets: FacetRasterizer,
    /// The classification of the voxels not crossed by any facet.
    pub inner: InnerRegionRasterizer,
}

impl PolytopeRasterizer {
    /// Classifies the voxels of `raster` against the boundary made of the
    /// local facets `facets`.
    pub fn rasterize(&self, facets: &[Facet], raster: &mut SparseRaster<Location>) {
        for facet in facets {
            self.facets.rasterize(facet, raster);
        }

        self.inner.rasterize(facets, raster);
    }
}

#[cfg(test)]
mod test {
    use super::PolytopeRasterizer;
    use crate::grid::{Mapper, SparseRaster};
    use crate::math::{Point, Vector};
    use crate::query::{locate_point, Location};
    use crate::shape::{Facet, Placement, Polytope};

    #[test]
    fn rasterized_cube_is_consistent_with_point_location() {
        let cube = Polytope::cuboid("cube", Vector::new(0.6, 0.45, 0.7));
        let mapper = Mapper::new(Placement::new(Point::new(0.05, -0.02, 0.01), 1.0), 8);
        let facets: Vec<Facet> = cube.facets().iter().map(|f| mapper.to_local_facet(f)).collect();

        let mut raster = SparseRaster::filled(mapper.raster_size(), Location::Outer);
        PolytopeRasterizer::default().rasterize(&facets, &mut raster);

        let mut num_inner = 0;
        for voxel in raster.voxels() {
            let corners = [0.0, 1.0].iter().flat_map(|dx| {
                [0.0, 1.0].iter().flat_map(move |dy| {
                    [0.0, 1.0].iter().map(move |dz| {
                        let c = voxel.coordinates();
                        Point::new(c[0] as f64 + dx, c[1] as f64 + dy, c[2] as f64 + dz)
                    })
                })
            });
            let locations: Vec<_> = corners
                .map(|corner| locate_point(&mapper.to_global_point(&corner), cube.facets()))
                .collect();

            match voxel.value {
                Location::Inner => {
                    num_inner += 1;
                    assert!(locations.iter().all(|l| *l == Location::Inner));
                }
                Location::Outer => assert!(locations.iter().all(|l| *l == Location::Outer)),
                Location::Boundary => {}
            }
        }

        assert!(num_inner > 0);
    }
}
