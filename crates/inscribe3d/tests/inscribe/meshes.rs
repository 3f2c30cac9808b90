use inscribe3d::math::{Point, Vector};
use inscribe3d::shape::Polytope;

/// The reference tetrahedron: inscribed in itself around the origin with radius 1.
pub fn tetrahedron() -> Polytope {
    Polytope::new(
        "tetrahedron",
        vec![
            Point::new(0.0, 0.0, 0.497343),
            Point::new(0.866025, -0.5, -1.502657),
            Point::new(-0.866025, -0.5, -1.502657),
            Point::new(0.0, 1.0, -1.502657),
        ],
        vec![[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]],
    )
    .unwrap()
}

/// The cube `[-0.5, 0.5]³`.
pub fn unit_box() -> Polytope {
    Polytope::cuboid("box", Vector::repeat(0.5))
}

/// The cube `[-0.5, 0.5]³` whose top face is pushed down to a point at
/// `z = 0.2` above the origin.
pub fn dented_box() -> Polytope {
    let mut vertices: Vec<_> = (0..8)
        .map(|i| {
            let coord = |bit: usize| if i & bit == 0 { -0.5 } else { 0.5 };
            Point::new(coord(4), coord(2), coord(1))
        })
        .collect();
    vertices.push(Point::new(0.0, 0.0, 0.2));

    Polytope::new(
        "dented box",
        vertices,
        vec![
            [0, 2, 6],
            [0, 6, 4],
            [0, 1, 3],
            [0, 3, 2],
            [4, 6, 7],
            [4, 7, 5],
            [0, 4, 5],
            [0, 5, 1],
            [2, 3, 7],
            [2, 7, 6],
            [1, 5, 8],
            [5, 7, 8],
            [7, 3, 8],
            [3, 1, 8],
        ],
    )
    .unwrap()
}
