use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::shape::{Face, Facet};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::{SortedPair, Subsets};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Index of a vertex of a [`Polytope`].
pub type VertexIndex = usize;
/// Index of a facet of a [`Polytope`].
pub type FacetIndex = usize;

/// Indicates an inconsistency while building a polytope.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolytopeError {
    /// A polytope must contain at least one facet.
    #[error("A polytope must contain at least one facet.")]
    EmptyFacets,
    /// A facet references a vertex that does not exist.
    #[error("the facet {facet} references the vertex {vertex} which is out of bounds.")]
    VertexOutOfBounds {
        /// The facet referencing the missing vertex.
        facet: FacetIndex,
        /// The out-of-bounds vertex index.
        vertex: VertexIndex,
    },
    /// Found a facet with two or three identical vertices.
    #[error("the facet {0} has at least two identical vertices.")]
    BadFacet(FacetIndex),
    /// An edge is not shared by exactly two facets, so the boundary is not closed.
    #[error("the edge {edge:?} is shared by {incident_facets} facet(s) instead of two.")]
    NonManifoldEdge {
        /// The vertices of the faulty edge.
        edge: (VertexIndex, VertexIndex),
        /// The number of facets containing this edge.
        incident_facets: usize,
    },
}

/// A solid given by its closed triangulated boundary.
///
/// Every edge of the boundary is shared by exactly two facets, so every facet
/// has exactly three neighbors. The facet orientation is irrelevant.
#[derive(Clone, Debug)]
pub struct Polytope {
    name: String,
    vertices: Vec<Point<Real>>,
    facet_topologies: Vec<[VertexIndex; DIM]>,
    facet_geometries: Vec<Facet>,
    neighbors: OnceLock<Vec<[FacetIndex; DIM]>>,
}

type EdgeIncidences = HashMap<SortedPair<VertexIndex>, SmallVec<[FacetIndex; 2]>>;

fn edge_incidences(facets: &[[VertexIndex; DIM]]) -> EdgeIncidences {
    let mut result = EdgeIncidences::default();

    for (facet_id, facet) in facets.iter().enumerate() {
        for edge in Subsets::new(DIM, DIM - 1) {
            let key = SortedPair::new(facet[edge[0]], facet[edge[1]]);
            match result.entry(key) {
                Entry::Occupied(mut e) => e.get_mut().push(facet_id),
                Entry::Vacant(e) => {
                    let _ = e.insert(SmallVec::from_elem(facet_id, 1));
                }
            }
        }
    }

    result
}

impl Polytope {
    /// Creates a polytope from its vertices and triangles.
    ///
    /// Fails if some triangle is degenerate or references a missing vertex, or if
    /// the triangles do not form a closed boundary.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Point<Real>>,
        facets: Vec<[VertexIndex; DIM]>,
    ) -> Result<Self, PolytopeError> {
        if facets.is_empty() {
            return Err(PolytopeError::EmptyFacets);
        }

        for (facet_id, facet) in facets.iter().enumerate() {
            if let Some(vertex) = facet.iter().find(|v| **v >= vertices.len()) {
                return Err(PolytopeError::VertexOutOfBounds {
                    facet: facet_id,
                    vertex: *vertex,
                });
            }

            if facet[0] == facet[1] || facet[0] == facet[2] || facet[1] == facet[2] {
                return Err(PolytopeError::BadFacet(facet_id));
            }
        }

        // Report the smallest faulty edge so the error does not depend on hashing.
        let faulty_edge = edge_incidences(&facets)
            .into_iter()
            .filter(|(_, incident)| incident.len() != 2)
            .min_by_key(|(edge, _)| *edge);

        if let Some((edge, incident)) = faulty_edge {
            return Err(PolytopeError::NonManifoldEdge {
                edge: edge.into_tuple(),
                incident_facets: incident.len(),
            });
        }

        let facet_geometries = facets
            .iter()
            .map(|f| [vertices[f[0]], vertices[f[1]], vertices[f[2]]])
            .collect();

        Ok(Self {
            name: name.into(),
            vertices,
            facet_topologies: facets,
            facet_geometries,
            neighbors: OnceLock::new(),
        })
    }

    /// An axis-aligned box centered at the origin, with twelve triangles.
    pub fn cuboid(name: impl Into<String>, half_extents: Vector<Real>) -> Self {
        let corners = [
            [-1.0, -1.0, 1.0],
            [-1.0, -1.0, -1.0],
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 1.0],
            [-1.0, 1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
        ];
        let vertices: Vec<_> = corners
            .iter()
            .map(|c| Point::from(Vector::from(*c).component_mul(&half_extents)))
            .collect();
        let facets = vec![
            [4, 5, 0],
            [5, 1, 0],
            [5, 6, 1],
            [6, 2, 1],
            [6, 7, 3],
            [2, 6, 3],
            [7, 4, 0],
            [3, 7, 0],
            [0, 1, 2],
            [3, 0, 2],
            [7, 6, 5],
            [4, 7, 5],
        ];

        Self {
            name: name.into(),
            facet_geometries: Self::geometries(&vertices, &facets),
            vertices,
            facet_topologies: facets,
            neighbors: OnceLock::new(),
        }
    }

    fn geometries(vertices: &[Point<Real>], facets: &[[VertexIndex; DIM]]) -> Vec<Facet> {
        facets
            .iter()
            .map(|f| [vertices[f[0]], vertices[f[1]], vertices[f[2]]])
            .collect()
    }

    /// The point reflection of this polytope through the origin.
    pub fn inverted(&self) -> Self {
        let vertices: Vec<_> = self.vertices.iter().map(|v| Point::from(-v.coords)).collect();

        Self {
            name: self.name.clone(),
            facet_geometries: Self::geometries(&vertices, &self.facet_topologies),
            vertices,
            facet_topologies: self.facet_topologies.clone(),
            neighbors: self.neighbors.clone(),
        }
    }

    /// The name of this polytope, e.g. the file it was loaded from.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The vertices of this polytope.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The vertex indices of each facet.
    #[inline]
    pub fn facet_topologies(&self) -> &[[VertexIndex; DIM]] {
        &self.facet_topologies
    }

    /// The vertices of each facet.
    #[inline]
    pub fn facets(&self) -> &[Facet] {
        &self.facet_geometries
    }

    /// The number of facets of this polytope.
    #[inline]
    pub fn num_facets(&self) -> usize {
        self.facet_topologies.len()
    }

    /// The three facets sharing an edge with the facet `facet_id`.
    ///
    /// The adjacency is computed on the first call.
    pub fn neighbors(&self, facet_id: FacetIndex) -> &[FacetIndex; DIM] {
        &self.neighbors.get_or_init(|| self.compute_neighbors())[facet_id]
    }

    fn compute_neighbors(&self) -> Vec<[FacetIndex; DIM]> {
        let incidences = edge_incidences(&self.facet_topologies);

        self.facet_topologies
            .iter()
            .enumerate()
            .map(|(facet_id, facet)| {
                let mut result = [facet_id; DIM];
                for (k, edge) in Subsets::new(DIM, DIM - 1).enumerate() {
                    let key = SortedPair::new(facet[edge[0]], facet[edge[1]]);
                    if let Some(other) = incidences
                        .get(&key)
                        .and_then(|incident| incident.iter().find(|f| **f != facet_id))
                    {
                        result[k] = *other;
                    }
                }
                result
            })
            .collect()
    }

    /// The distinct faces of dimension `dim` of this polytope: its vertices for
    /// `dim == 0`, its edges for `dim == 1`, and its facets for `dim == 2`.
    ///
    /// Faces are ordered by their sorted vertex indices.
    pub fn faces(&self, dim: usize) -> Vec<Face> {
        assert!(dim < DIM, "A polytope has no face of dimension {}.", dim);

        let mut topologies = BTreeSet::new();
        for facet in &self.facet_topologies {
            for subset in Subsets::new(DIM, dim + 1) {
                let mut face = Subsets::select(facet, &subset);
                face.sort_unstable();
                let _ = topologies.insert(face);
            }
        }

        topologies
            .into_iter()
            .map(|face| face.iter().map(|v| self.vertices[*v]).collect())
            .collect()
    }

    /// The bounding box of this polytope.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }
}

#[cfg(test)]
mod test {
    use super::{Polytope, PolytopeError};
    use crate::math::{Point, Vector};

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
    fn cuboid_neighbors() {
        let cuboid = Polytope::cuboid("cuboid", Vector::repeat(0.5));
        for i in 0..cuboid.num_facets() {
            let neighbors = cuboid.neighbors(i);
            assert!(!neighbors.contains(&i));
            for n in neighbors {
                assert!(cuboid.neighbors(*n).contains(&i));
            }
        }
    }

    #[test]
    fn face_counts() {
        let cuboid = Polytope::cuboid("cuboid", Vector::repeat(0.5));
        assert_eq!(cuboid.faces(0).len(), 8);
        assert_eq!(cuboid.faces(1).len(), 18);
        assert_eq!(cuboid.faces(2).len(), 12);

        let tetra = tetrahedron();
        assert_eq!(tetra.faces(0).len(), 4);
        assert_eq!(tetra.faces(1).len(), 6);
        assert_eq!(tetra.faces(2).len(), 4);
    }

    #[test]
    fn inversion_negates_vertices() {
        let tetra = tetrahedron();
        let inverted = tetra.inverted();
        assert_eq!(inverted.vertices()[0], Point::new(0.0, 0.0, -1.0));
        assert_eq!(inverted.facets()[3][0], Point::new(-1.0, 0.0, 1.0));
        assert_eq!(inverted.facet_topologies(), tetra.facet_topologies());
    }

    #[test]
    fn open_boundary_is_rejected() {
        let result = Polytope::new(
            "open",
            vec![
                Point::new(0.0, 0.0, 1.0),
                Point::new(1.0, 0.0, -1.0),
                Point::new(-1.0, 1.0, -1.0),
                Point::new(-1.0, -1.0, -1.0),
            ],
            vec![[0, 1, 2], [0, 2, 3], [0, 3, 1]],
        );
        assert!(matches!(
            result,
            Err(PolytopeError::NonManifoldEdge {
                incident_facets: 1,
                ..
            })
        ));
    }

    #[test]
    fn invalid_facets_are_rejected() {
        let vertices = vec![Point::origin(), Point::new(1.0, 0.0, 0.0)];
        assert_eq!(
            Polytope::new("empty", vertices.clone(), vec![]).unwrap_err(),
            PolytopeError::EmptyFacets
        );
        assert_eq!(
            Polytope::new("degenerate", vertices.clone(), vec![[0, 1, 1]]).unwrap_err(),
            PolytopeError::BadFacet(0)
        );
        assert_eq!(
            Polytope::new("missing", vertices, vec![[0, 1, 2]]).unwrap_err(),
            PolytopeError::VertexOutOfBounds {
                facet: 0,
                vertex: 2
            }
        );
    }
}
