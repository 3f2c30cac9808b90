use crate::meshes::{dented_box, tetrahedron, unit_box};
use inscribe3d::math::{Point, Real};
use inscribe3d::query::{locate_point, Location};
use inscribe3d::shape::Polytope;
use inscribe3d::transformation::{ConvexDecompositor, ConvexPart, MinkowskiSum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_partition(polytope: &Polytope, parts: &[ConvexPart]) {
    let mut covered = vec![0; polytope.num_facets()];
    for part in parts {
        for facet in &part.facets {
            covered[*facet] += 1;
        }
    }

    assert!(
        covered.iter().all(|count| *count == 1),
        "Facets of {} covered {:?} times.",
        polytope.name(),
        covered
    );
}

fn assert_parts_inside(polytope: &Polytope, parts: &[ConvexPart], rng: &mut StdRng) {
    for part in parts {
        for _ in 0..20 {
            let weights: Vec<Real> = part.vertices.iter().map(|_| rng.gen_range(0.1..1.0)).collect();
            let total: Real = weights.iter().sum();
            let pt = part
                .vertices
                .iter()
                .zip(weights.iter())
                .fold(Point::origin(), |acc, (vertex, w)| acc + vertex.coords * (*w / total));

            assert_ne!(
                locate_point(&pt, polytope.facets()),
                Location::Outer,
                "{pt:?} lies outside of {}.",
                polytope.name()
            );
        }
    }
}

#[test]
fn flood_fill_partitions_the_facets() {
    let mut rng = StdRng::seed_from_u64(0);

    for polytope in [unit_box(), tetrahedron(), dented_box()] {
        let parts = ConvexDecompositor::FloodFill.decompose(&polytope);
        assert_partition(&polytope, &parts);
        assert_parts_inside(&polytope, &parts, &mut rng);
    }
}

#[test]
fn dented_box_needs_several_parts() {
    let dented = dented_box();
    let parts = ConvexDecompositor::FloodFill.decompose(&dented);

    assert!(parts.len() > 1);
    assert!(parts.len() < dented.num_facets());
    assert!(parts.iter().all(|part| part.vertices[0] == Point::origin()));
}

#[test]
fn star_fan_and_identity() {
    let dented = dented_box();
    let mut rng = StdRng::seed_from_u64(1);

    let fan = ConvexDecompositor::StarFan.decompose(&dented);
    assert_eq!(fan.len(), dented.num_facets());
    assert_partition(&dented, &fan);
    assert_parts_inside(&dented, &fan, &mut rng);

    let cube = unit_box();
    let whole = ConvexDecompositor::Identity.decompose(&cube);
    assert_eq!(whole.len(), 1);
    assert_eq!(whole[0].vertices.len(), 8);
    assert_partition(&cube, &whole);
}

#[test]
fn one_template_per_contour_facet_and_part() {
    let pattern = dented_box().inverted();
    let contour = tetrahedron();
    let parts = ConvexDecompositor::FloodFill.decompose(&pattern);
    let sum = MinkowskiSum::new(&contour, &parts);

    assert_eq!(sum.num_pattern_parts(), parts.len());
    assert_eq!(sum.num_templates(), parts.len() * contour.num_facets());

    for (template, part) in sum.templates().iter().zip(sum.convex_parts(0.5)) {
        for (facet, materialized) in template.facets.iter().zip(part.facets()) {
            for (vertex, pt) in facet.iter().zip(materialized.iter()) {
                assert!(template.base_facet.contains(&vertex.origin));
                assert_relative_eq!(*pt, vertex.origin + vertex.direction * 0.5);
            }
        }
    }
}
