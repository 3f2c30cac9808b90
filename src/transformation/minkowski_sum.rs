//! Minkowski sums of contour facets with scaled convex parts of a pattern.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Facet;
use crate::shape::Polytope;
use crate::transformation::incremental_hull::IncrementalHull;
use crate::transformation::ConvexPart;
use crate::utils::unit_normal;

/// A vertex of a Minkowski sum, as a function of the pattern scale `s`.
///
/// At scale `s` the vertex is located at `origin + s * direction`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexTemplate {
    /// The contour vertex contributing to this vertex.
    pub origin: Point<Real>,
    /// The pattern vertex contributing to this vertex.
    pub direction: Vector<Real>,
}

impl VertexTemplate {
    /// The position of this vertex for the given pattern scale.
    #[inline]
    pub fn at(&self, scale: Real) -> Point<Real> {
        self.origin + self.direction * scale
    }
}

/// The boundary of the sum of one contour facet and one pattern convex part.
#[derive(Clone, Debug)]
pub struct ConvexPartTemplate {
    /// The triangles of the sum boundary.
    pub facets: Vec<[VertexTemplate; 3]>,
    /// The contour facet of the sum.
    pub base_facet: Facet,
    /// A pattern direction leaving the plane of the base facet.
    pub inner_direction: Vector<Real>,
}

/// The union of the sums of every contour facet with every pattern part.
///
/// A point `c` lies inside the sum at scale `s` iff the pattern scaled by `s`
/// and *inverted* around `c` crosses the contour boundary. Solvers therefore
/// build this sum from the decomposition of the inverted pattern.
#[derive(Clone, Debug)]
pub struct MinkowskiSum {
    parts: Vec<ConvexPartTemplate>,
    num_pattern_parts: usize,
}

/// One convex part of a [`MinkowskiSum`] materialized at a given scale.
#[derive(Copy, Clone, Debug)]
pub struct MinkowskiSumPart<'a> {
    template: &'a ConvexPartTemplate,
    scale: Real,
}

impl MinkowskiSumPart<'_> {
    /// The boundary triangles of this part.
    pub fn facets(&self) -> impl ExactSizeIterator<Item = Facet> + '_ {
        let scale = self.scale;
        self.template
            .facets
            .iter()
            .map(move |facet| facet.map(|v| v.at(scale)))
    }

    /// The contour facet this part was built from.
    #[inline]
    pub fn base_facet(&self) -> &Facet {
        &self.template.base_facet
    }

    /// A direction pointing from the base facet into this part.
    #[inline]
    pub fn inner_direction(&self) -> &Vector<Real> {
        &self.template.inner_direction
    }
}

impl MinkowskiSum {
    /// Builds the sum templates of every pattern part with every contour facet.
    ///
    /// Parts are the outer loop: templates of the first part come first, in
    /// contour facet order.
    pub fn new(contour: &Polytope, pattern_parts: &[ConvexPart]) -> Self {
        let mut parts = Vec::with_capacity(pattern_parts.len() * contour.num_facets());

        for pattern_part in pattern_parts {
            for facet in contour.facets() {
                match convex_sum(facet, &pattern_part.vertices) {
                    Some(part) => parts.push(part),
                    None => log::debug!(
                        "Skipping a flat Minkowski sum of a facet of {} with a pattern part.",
                        contour.name()
                    ),
                }
            }
        }

        Self {
            parts,
            num_pattern_parts: pattern_parts.len(),
        }
    }

    /// The number of pattern parts this sum was built from.
    #[inline]
    pub fn num_pattern_parts(&self) -> usize {
        self.num_pattern_parts
    }

    /// The number of convex part templates.
    #[inline]
    pub fn num_templates(&self) -> usize {
        self.parts.len()
    }

    /// The templates of the convex parts of this sum.
    #[inline]
    pub fn templates(&self) -> &[ConvexPartTemplate] {
        &self.parts
    }

    /// The convex parts of this sum for the given, strictly positive, pattern scale.
    pub fn convex_parts(&self, scale: Real) -> impl ExactSizeIterator<Item = MinkowskiSumPart<'_>> {
        debug_assert!(scale > DEFAULT_EPSILON);
        self.parts
            .iter()
            .map(move |template| MinkowskiSumPart { template, scale })
    }
}

fn convex_sum(facet: &Facet, pattern_vertices: &[Point<Real>]) -> Option<ConvexPartTemplate> {
    let mut candidates = Vec::with_capacity(facet.len() * pattern_vertices.len());
    for origin in facet {
        for vertex in pattern_vertices {
            candidates.push(VertexTemplate {
                origin: *origin,
                direction: vertex.coords,
            });
        }
    }

    let points: Vec<_> = candidates.iter().map(|t| t.at(1.0)).collect();
    let first = IncrementalHull::initial_tetrahedron(&points)?;
    let mut hull = IncrementalHull::from_tetrahedron(first.map(|i| points[i]))?;
    let mut templates: Vec<_> = first.iter().map(|i| candidates[*i]).collect();

    for (i, template) in candidates.iter().enumerate() {
        if first.contains(&i) {
            continue;
        }

        if let Some(id) = hull.insert(points[i]) {
            debug_assert_eq!(id, templates.len());
            templates.push(*template);
        }
    }

    let facets: Vec<_> = hull
        .faces()
        .map(|(_, face)| face.pts.map(|i| templates[i]))
        .collect();
    let inner_direction = find_inner_direction(facet, &facets);

    Some(ConvexPartTemplate {
        facets,
        base_facet: *facet,
        inner_direction,
    })
}

fn find_inner_direction(base_facet: &Facet, facets: &[[VertexTemplate; 3]]) -> Vector<Real> {
    let normal = unit_normal(base_facet);

    facets
        .iter()
        .flatten()
        .map(|v| v.direction)
        .find(|dir| dir.dot(&normal).abs() > DEFAULT_EPSILON)
        .unwrap_or_else(|| {
            debug_assert!(false, "The pattern part is flat.");
            facets[0][0].direction
        })
}

#[cfg(test)]
mod test {
    use super::MinkowskiSum;
    use crate::math::{Point, Vector, DEFAULT_EPSILON};
    use crate::shape::Polytope;
    use crate::transformation::ConvexDecompositor;
    use crate::utils::{center, facet_normal, unit_normal};

    fn tetrahedron() -> Polytope {
        Polytope::new(
            "tetrahedron",
            vec![
                Point::new(0.0, 0.0, 1.0),
                Point::new(1.0, 0.0, -1.0),
                Point::new(-1.0, 1.0, -1.0),
                Point::new(-1.0, -1.0, -1.0),
            ],
            vec![[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]],
        )
        .unwrap()
    }

    #[test]
    fn one_template_per_facet_and_part() {
        let contour = Polytope::cuboid("contour", Vector::repeat(1.0));
        let pattern = tetrahedron();
        let parts = ConvexDecompositor::StarFan.decompose(&pattern);
        let sum = MinkowskiSum::new(&contour, &parts);

        assert_eq!(sum.num_pattern_parts(), 4);
        assert_eq!(sum.num_templates(), 4 * 12);
        assert_eq!(sum.convex_parts(0.5).len(), 48);
    }

    #[test]
    fn templates_materialize_to_vertex_sums() {
        let contour = tetrahedron();
        let pattern = Polytope::cuboid("pattern", Vector::repeat(0.5));
        let parts = ConvexDecompositor::Identity.decompose(&pattern);
        let sum = MinkowskiSum::new(&contour, &parts);
        let scale = 0.3;

        for (template, part) in sum.templates().iter().zip(sum.convex_parts(scale)) {
            assert_eq!(part.base_facet(), &template.base_facet);
            let normal = unit_normal(part.base_facet());
            assert!(part.inner_direction().dot(&normal).abs() > DEFAULT_EPSILON);

            for (facet, facet_template) in part.facets().zip(template.facets.iter()) {
                for (pt, vertex) in facet.iter().zip(facet_template.iter()) {
                    assert!(template.base_facet.contains(&vertex.origin));
                    assert!(pattern.vertices().contains(&Point::from(vertex.direction)));
                    assert_relative_eq!(*pt, vertex.origin + vertex.direction * scale);
                }
            }
        }
    }

    #[test]
    fn sum_of_a_facet_and_a_cube_is_a_prism() {
        let contour = tetrahedron();
        let pattern = Polytope::cuboid("pattern", Vector::repeat(0.5));
        let parts = ConvexDecompositor::Identity.decompose(&pattern);
        let sum = MinkowskiSum::new(&contour, &parts);

        for part in sum.convex_parts(1.0) {
            let facet = part.base_facet();
            let centroid = center(facet);

            // Every facet vertex shifted by a cube corner is enclosed.
            for pt in facet {
                for corner in pattern.vertices() {
                    let sample = pt + (corner.coords * 0.99) + (centroid - pt) * 0.01;
                    for triangle in part.facets() {
                        let normal = facet_normal(&triangle);
                        let inner = centroid - triangle[0];
                        let side = normal.dot(&inner).signum();
                        assert!(side * normal.dot(&(sample - triangle[0])) >= -1.0e-9);
                    }
                }
            }
        }
    }
}
