use crate::meshes::{dented_box, tetrahedron, unit_box};
use inscribe3d::math::{Point, Real, Vector};
use inscribe3d::query::{locate_point, AxisDistance, Location};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn tetrahedron_locations() {
    let tetra = tetrahedron();

    assert_eq!(locate_point(&Point::origin(), tetra.facets()), Location::Inner);
    assert_eq!(
        locate_point(&Point::new(0.0, 0.0, 5.0), tetra.facets()),
        Location::Outer
    );
    assert_eq!(
        locate_point(&Point::new(3.0, -2.0, -1.0), tetra.facets()),
        Location::Outer
    );

    for vertex in tetra.vertices() {
        assert_eq!(locate_point(vertex, tetra.facets()), Location::Boundary);
    }

    // On the base, below the apex.
    assert_eq!(
        locate_point(&Point::new(0.0, 0.0, -1.502657), tetra.facets()),
        Location::Boundary
    );
}

#[test]
fn dent_is_outside() {
    let dented = dented_box();

    assert_eq!(locate_point(&Point::origin(), dented.facets()), Location::Inner);
    assert_eq!(
        locate_point(&Point::new(0.0, 0.0, 0.35), dented.facets()),
        Location::Outer
    );
    assert_eq!(
        locate_point(&Point::new(0.45, 0.4, 0.4), dented.facets()),
        Location::Inner
    );
    assert_eq!(
        locate_point(&Point::new(0.0, 0.0, 0.2), dented.facets()),
        Location::Boundary
    );
}

#[test]
fn random_points_in_a_box() {
    let cube = unit_box();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        let pt = Point::from(Vector::<Real>::from_fn(|_, _| rng.gen_range(-1.0..1.0)));
        let norm = pt.coords.amax();

        // Too close to the boundary for a strict answer.
        if (norm - 0.5).abs() < 1.0e-6 {
            continue;
        }

        let expected = if norm < 0.5 {
            Location::Inner
        } else {
            Location::Outer
        };
        assert_eq!(locate_point(&pt, cube.facets()), expected, "{pt:?}");
    }
}

#[test]
fn axis_distances_follow_the_facet_plane() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut num_checked = 0;

    for _ in 0..500 {
        let facet = [(); 3].map(|_| Point::from(Vector::<Real>::from_fn(|_, _| rng.gen_range(-2.0..2.0))));
        let normal = (facet[1] - facet[0]).cross(&(facet[2] - facet[0]));

        // Nearly vertical facets are not hit by vertical rays.
        if normal.z.abs() < 0.1 * normal.norm() {
            continue;
        }

        let weights = [(); 3].map(|_| rng.gen_range(0.05..1.0));
        let total: Real = weights.iter().sum();
        let on_facet = Point::from(
            facet
                .iter()
                .zip(weights.iter())
                .fold(Vector::zeros(), |acc, (pt, w)| acc + pt.coords * (*w / total)),
        );
        let height = rng.gen_range(-3.0..3.0);
        let from = on_facet - Vector::z() * height;

        let distance = AxisDistance::new(&facet).eval(&from);
        assert_eq!(distance.location, Location::Inner);
        assert_relative_eq!(distance.value, height, epsilon = 1.0e-6, max_relative = 1.0e-6);
        num_checked += 1;
    }

    assert!(num_checked > 100);
}
