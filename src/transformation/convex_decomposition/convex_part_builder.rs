use crate::math::{Point, Real};
use crate::query::sat::SimplexFacetOverlap;
use crate::query::{locate_point, Location};
use crate::shape::{outer_point, FacetIndex, Polytope, Simplex, VertexIndex};
use crate::transformation::incremental_hull::{HullFaceId, HullLocation, IncrementalHull};
use crate::utils;
use crate::utils::hashmap::HashMap;
use std::collections::BTreeMap;

/// Grows a convex part of a star-shaped polytope facet by facet.
///
/// The part is the convex hull of the origin and of the vertices of the
/// accepted facets. Each accepted facet occupies the hull face lying just
/// outside of it; a new vertex is only accepted if the hull faces it removes
/// are free and every tetrahedron it adds lies inside the polytope.
pub struct ConvexPartBuilder<'a> {
    polytope: &'a Polytope,
    hull: IncrementalHull,
    // Polytope vertex -> hull point. The hull point 0 is the origin.
    used_vertices: BTreeMap<VertexIndex, usize>,
    occupied_faces: HashMap<HullFaceId, FacetIndex>,
    facets: Vec<FacetIndex>,
}

impl<'a> ConvexPartBuilder<'a> {
    /// Starts a part made of the tetrahedron joining the origin and the facet `seed`.
    ///
    /// Returns `None` if the origin lies on the plane of `seed`, which never
    /// happens for a polytope strictly star-shaped around the origin.
    pub fn new(polytope: &'a Polytope, seed: FacetIndex) -> Option<Self> {
        let topology = polytope.facet_topologies()[seed];
        let facet = &polytope.facets()[seed];
        let hull = IncrementalHull::from_tetrahedron([Point::origin(), facet[0], facet[1], facet[2]])?;

        let mut result = Self {
            polytope,
            hull,
            used_vertices: topology.iter().enumerate().map(|(i, v)| (*v, i + 1)).collect(),
            occupied_faces: HashMap::default(),
            facets: vec![seed],
        };
        result.occupy_outer_face(seed);
        Some(result)
    }

    /// Tries to extend this part with the facet `facet_id`.
    ///
    /// The facet must share an edge with an already accepted facet, so it has at
    /// most one vertex not yet in the part. Returns `true` if the facet was added;
    /// a rejected facet leaves the part untouched.
    pub fn try_add_facet(&mut self, facet_id: FacetIndex) -> bool {
        let topology = self.polytope.facet_topologies()[facet_id];
        let new_vertex = topology
            .iter()
            .find(|v| !self.used_vertices.contains_key(*v))
            .copied();

        let new_vertex = match new_vertex {
            Some(vertex) => vertex,
            None => {
                self.facets.push(facet_id);
                self.occupy_outer_face(facet_id);
                return true;
            }
        };

        debug_assert_eq!(
            topology
                .iter()
                .filter(|v| !self.used_vertices.contains_key(*v))
                .count(),
            1,
            "Only facets adjacent to the part can be added."
        );

        let new_point = self.polytope.vertices()[new_vertex];
        let affected_faces = match self.hull.locate(&new_point) {
            HullLocation::Outside(visible) => visible,
            HullLocation::Inside | HullLocation::OnBoundary => return false,
        };

        for face_id in &affected_faces {
            // The new vertex must not cover a facet of the part.
            if self.occupied_faces.contains_key(face_id) {
                return false;
            }

            // Each removed face is replaced by the tetrahedron joining it to the new vertex.
            let face = self.hull.face_points(*face_id);
            let simplex = [face[0], face[1], face[2], new_point];
            if !is_simplex_inside_polytope(&simplex, self.polytope) {
                return false;
            }
        }

        let (hull_point, _) = self.hull.insert_visible(new_point, &affected_faces);
        let _ = self.used_vertices.insert(new_vertex, hull_point);
        self.facets.push(facet_id);
        self.occupy_outer_face(facet_id);
        true
    }

    /// The vertices of this part: the origin followed by the vertices of the
    /// accepted facets, in increasing index order.
    pub fn vertices(&self) -> Vec<Point<Real>> {
        let vertices = self.polytope.vertices();
        std::iter::once(Point::origin())
            .chain(self.used_vertices.keys().map(|v| vertices[*v]))
            .collect()
    }

    /// The facets accepted so far, in acceptance order.
    pub fn facets(&self) -> &[FacetIndex] {
        &self.facets
    }

    fn occupy_outer_face(&mut self, facet_id: FacetIndex) {
        let topology = self.polytope.facet_topologies()[facet_id];
        let hull_points = topology.map(|v| self.used_vertices.get(&v).copied());

        let face = match hull_points {
            [Some(a), Some(b), Some(c)] => self.hull.find_face([a, b, c]),
            _ => None,
        }
        .or_else(|| {
            self.hull
                .face_below(&outer_point(&self.polytope.facets()[facet_id]))
        });

        match face {
            Some(face) => {
                let _ = self.occupied_faces.insert(face, facet_id);
            }
            None => log::debug!(
                "No hull face lies outside of the facet {} of {}.",
                facet_id,
                self.polytope.name()
            ),
        }
    }
}

fn is_simplex_inside_polytope(simplex: &Simplex, polytope: &Polytope) -> bool {
    let overlap = SimplexFacetOverlap::new(simplex);
    if polytope
        .facets()
        .iter()
        .any(|facet| overlap.test(facet) == Location::Inner)
    {
        return false;
    }

    locate_point(&utils::center(simplex), polytope.facets()) != Location::Outer
}
