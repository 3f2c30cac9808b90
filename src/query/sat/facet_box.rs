use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::shape::{facet_aabb, Facet};
use crate::utils;
use std::cell::OnceCell;

use super::LinearTest;

/// Overlap test between a triangle and axis-aligned boxes of a fixed size.
///
/// Follows Schwarz & Seidel, "Fast parallel surface and solid voxelization on
/// GPUs": a box overlaps the triangle iff it crosses the triangle plane and, for
/// each coordinate axis, its projection overlaps the triangle projection. Each
/// test only evaluates the box corner most likely to pass it. The tests are
/// built on first use since most boxes are rejected by the bounding box alone.
#[derive(Clone, Debug)]
pub struct FacetBoxOverlap {
    box_size: Vector<Real>,
    facet: Facet,
    aabb: Aabb,
    normal: OnceCell<Vector<Real>>,
    plane_tests: OnceCell<[LinearTest; 2]>,
    // Axes along which the triangle projects to a segment.
    axis_degenerate: OnceCell<[bool; DIM]>,
    // axis -> tests of the projections of each edge along this axis.
    edge_tests: OnceCell<[[LinearTest; DIM]; DIM]>,
}

impl FacetBoxOverlap {
    /// The corner of a box at the origin with the smallest projection on `normal`.
    pub fn lowest_point(box_size: &Vector<Real>, normal: &Vector<Real>) -> Point<Real> {
        let mut result = Point::origin();
        for i in 0..DIM {
            if normal[i] < -DEFAULT_EPSILON {
                result[i] = box_size[i];
            }
        }
        result
    }

    /// Prepares overlap tests between `facet` and boxes of size `box_size`.
    pub fn new(box_size: Vector<Real>, facet: Facet) -> Self {
        Self {
            box_size,
            aabb: facet_aabb(&facet),
            facet,
            normal: OnceCell::new(),
            plane_tests: OnceCell::new(),
            axis_degenerate: OnceCell::new(),
            edge_tests: OnceCell::new(),
        }
    }

    /// Does the box with the given lower corner overlap the triangle?
    pub fn overlaps(&self, lower_corner: &Point<Real>) -> bool {
        for i in 0..DIM {
            if lower_corner[i] > self.aabb.maxs[i]
                || lower_corner[i] + self.box_size[i] < self.aabb.mins[i]
            {
                return false;
            }
        }

        let plane_tests = self.plane_tests.get_or_init(|| self.build_plane_tests());
        if plane_tests[0].eval(lower_corner) * plane_tests[1].eval(lower_corner) > 0.0 {
            return false;
        }

        let axis_degenerate = self
            .axis_degenerate
            .get_or_init(|| self.normal().map(|n| n.abs() < DEFAULT_EPSILON).into());
        let edge_tests = self.edge_tests.get_or_init(|| self.build_edge_tests());

        for axis in 0..DIM {
            if axis_degenerate[axis] {
                continue;
            }

            if edge_tests[axis]
                .iter()
                .any(|test| test.eval(lower_corner) > DEFAULT_EPSILON)
            {
                return false;
            }
        }

        true
    }

    fn normal(&self) -> &Vector<Real> {
        self.normal.get_or_init(|| utils::unit_normal(&self.facet))
    }

    // The lowest corner and the opposite one along the normal.
    fn build_plane_tests(&self) -> [LinearTest; 2] {
        let normal = *self.normal();
        let critical = Self::lowest_point(&self.box_size, &normal);

        [
            LinearTest::new(normal, normal.dot(&(critical - self.facet[0]))),
            LinearTest::new(
                normal,
                normal.dot(&(self.box_size - critical.coords - self.facet[0].coords)),
            ),
        ]
    }

    fn build_edge_tests(&self) -> [[LinearTest; DIM]; DIM] {
        let mut result = [[LinearTest::new(Vector::zeros(), 0.0); DIM]; DIM];

        for (axis, tests) in result.iter_mut().enumerate() {
            for (edge, test) in tests.iter_mut().enumerate() {
                let normal = self.edge_normal(axis, edge);
                let critical = Self::lowest_point(&self.box_size, &normal);
                *test = LinearTest::new(normal, normal.dot(&(critical - self.facet[edge])));
            }
        }

        result
    }

    // Normal of the projection of an edge along `axis`, pointing away from the triangle.
    fn edge_normal(&self, axis: usize, edge: usize) -> Vector<Real> {
        let edge_points = [self.facet[edge], self.facet[(edge + 1) % DIM]];
        let mut axis_points = [Point::origin(); 2];
        axis_points[1][axis] = 1.0;

        let normal = utils::common_perpendicular(&edge_points, &axis_points);
        let opposite = self.facet[(edge + DIM - 1) % DIM];

        if normal.dot(&(opposite - self.facet[edge])) > 0.0 {
            -normal
        } else {
            normal
        }
    }
}
