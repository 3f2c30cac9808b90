use crate::meshes::dented_box;
use inscribe3d::grid::rasterization::{FacetRasterizer, InnerRegionRasterizer, PolytopeRasterizer};
use inscribe3d::grid::{refine, shrink, Mapper, Sampling, SparseRaster};
use inscribe3d::math::{Point, Real};
use inscribe3d::query::{locate_point, Location};
use inscribe3d::shape::{Facet, Placement};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn global_corners(sampling: &Sampling) -> Vec<Point<Real>> {
    sampling
        .raster()
        .voxels()
        .iter()
        .filter(|voxel| voxel.value.is_hit())
        .map(|voxel| sampling.mapper().to_global_coordinates(voxel.coordinates()))
        .collect()
}

#[test]
fn shrinking_a_refinement_keeps_the_region() {
    let mut rng = StdRng::seed_from_u64(3);
    let container = Placement::new(Point::new(0.3, -0.1, 0.2), 1.5);

    for _ in 0..20 {
        let mut sampling = Sampling::filled(container, 8, Location::Outer);
        for voxel in sampling.raster_mut().voxels_mut() {
            voxel.value = match rng.gen_range(0..10) {
                0 => Location::Boundary,
                1 => Location::Inner,
                _ => Location::Outer,
            };
        }

        let refined = refine(&sampling);
        let shrunk = shrink(&refined);
        assert_eq!(shrunk.len(), refined.len());
        assert_relative_eq!(shrunk.mapper().grid_step(), refined.mapper().grid_step());

        let expected = global_corners(&refined);
        let actual = global_corners(&shrunk);
        assert_eq!(expected.len(), actual.len());
        for (lhs, rhs) in expected.iter().zip(actual.iter()) {
            assert_relative_eq!(*lhs, *rhs, epsilon = 1.0e-9);
        }

        assert!(shrunk.mapper().grid_size() <= refined.mapper().grid_size());
    }
}

#[test]
fn rasterized_dent_matches_point_location() {
    let dented = dented_box();
    let mapper = Mapper::new(Placement::new(Point::new(0.031, -0.017, 0.023), 0.9), 16);
    let facets: Vec<Facet> = dented
        .facets()
        .iter()
        .map(|facet| mapper.to_local_facet(facet))
        .collect();

    let mut reference: Option<SparseRaster<Location>> = None;

    for inner in [
        InnerRegionRasterizer::Sequential,
        InnerRegionRasterizer::ByFacets,
        InnerRegionRasterizer::ByRays,
    ] {
        let rasterizer = PolytopeRasterizer {
            facets: FacetRasterizer::Overlap,
            inner,
        };
        let mut raster = SparseRaster::filled(mapper.raster_size(), Location::Outer);
        rasterizer.rasterize(&facets, &mut raster);

        match &reference {
            Some(reference) => assert_eq!(reference, &raster, "{inner:?}"),
            None => reference = Some(raster),
        }
    }

    let raster = reference.unwrap();
    let mut counts = [0; 3];

    for voxel in raster.voxels() {
        let c = voxel.coordinates();
        let center = Point::new(c[0] as Real + 0.5, c[1] as Real + 0.5, c[2] as Real + 0.5);
        let location = locate_point(&mapper.to_global_point(&center), dented.facets());

        match voxel.value {
            Location::Outer => {
                counts[0] += 1;
                assert_eq!(location, Location::Outer);
            }
            Location::Boundary => counts[1] += 1,
            Location::Inner => {
                counts[2] += 1;
                assert_eq!(location, Location::Inner);
            }
        }
    }

    assert!(counts.iter().all(|count| *count > 0), "{counts:?}");
}
