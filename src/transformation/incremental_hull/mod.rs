//! Convex hull maintained under point insertions.

pub use self::hull_face::HullFace;

use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::utils::hashmap::HashSet;
use slab::Slab;

mod hull_face;

/// Identifier of a face of an [`IncrementalHull`].
///
/// Identifiers of removed faces may be reused by later insertions.
pub type HullFaceId = usize;

/// Location of a point relative to an [`IncrementalHull`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullLocation {
    /// Strictly inside every face plane.
    Inside,
    /// Not strictly outside any face, but within the tolerance of some of them.
    OnBoundary,
    /// Strictly outside: the faces seeing the point are listed.
    Outside(Vec<HullFaceId>),
}

/// A three-dimensional convex hull built by successive point insertions.
///
/// Inserting a point outside the hull removes every face seeing it and
/// connects the horizon of that region to the new point. Points inside the
/// hull, or within the tolerance of its boundary, are ignored.
#[derive(Clone, Debug)]
pub struct IncrementalHull {
    points: Vec<Point<Real>>,
    faces: Slab<HullFace>,
}

impl IncrementalHull {
    /// Creates the hull of a tetrahedron.
    ///
    /// Returns `None` if the four points are coplanar.
    pub fn from_tetrahedron(points: [Point<Real>; 4]) -> Option<Self> {
        let scale = points
            .iter()
            .map(|p| (p - points[0]).norm())
            .fold(0.0, Real::max);
        let volume = (points[1] - points[0])
            .cross(&(points[2] - points[0]))
            .dot(&(points[3] - points[0]));

        if volume.abs() <= DEFAULT_EPSILON * scale * scale * scale {
            return None;
        }

        let mut result = Self {
            points: points.to_vec(),
            faces: Slab::with_capacity(4),
        };

        // Faces seen from outside are counter-clockwise.
        let faces = if volume > 0.0 {
            [[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]]
        } else {
            [[0, 1, 2], [0, 3, 1], [1, 3, 2], [0, 2, 3]]
        };

        for [a, b, c] in faces {
            let _ = result.faces.insert(HullFace::new(a, b, c, &result.points));
        }

        Some(result)
    }

    /// Picks four input points spanning a tetrahedron of non-negligible volume.
    ///
    /// Returns `None` if all the points are coplanar.
    pub fn initial_tetrahedron(points: &[Point<Real>]) -> Option<[usize; 4]> {
        let first = (0..points.len()).min_by(|a, b| points[*a].x.total_cmp(&points[*b].x))?;
        let farthest = |metric: &dyn Fn(&Point<Real>) -> Real| {
            (0..points.len())
                .map(|i| (i, metric(&points[i])))
                .max_by(|a, b| a.1.total_cmp(&b.1))
        };

        let (second, length) = farthest(&|p| (p - points[first]).norm())?;
        if length <= DEFAULT_EPSILON {
            return None;
        }

        let dir = (points[second] - points[first]) / length;
        let (third, height) = farthest(&|p| {
            let ap = p - points[first];
            (ap - dir * ap.dot(&dir)).norm()
        })?;
        if height <= DEFAULT_EPSILON * length {
            return None;
        }

        let normal = dir
            .cross(&(points[third] - points[first]))
            .normalize();
        let (fourth, depth) = farthest(&|p| normal.dot(&(p - points[first])).abs())?;
        if depth <= DEFAULT_EPSILON * length {
            return None;
        }

        Some([first, second, third, fourth])
    }

    /// The points of this hull, including the ones inserted after construction.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The faces currently on the boundary of this hull.
    #[inline]
    pub fn faces(&self) -> impl Iterator<Item = (HullFaceId, &HullFace)> {
        self.faces.iter()
    }

    /// The face with the given identifier.
    #[inline]
    pub fn face(&self, id: HullFaceId) -> &HullFace {
        &self.faces[id]
    }

    /// The vertices of the face with the given identifier.
    #[inline]
    pub fn face_points(&self, id: HullFaceId) -> [Point<Real>; 3] {
        self.faces[id].pts.map(|i| self.points[i])
    }

    /// The number of faces of this hull.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Locates `pt` relative to this hull.
    pub fn locate(&self, pt: &Point<Real>) -> HullLocation {
        let mut visible = Vec::new();
        let mut inside = true;

        for (id, face) in self.faces.iter() {
            let distance = face.distance_to_point(pt, &self.points);
            if face.can_see_point(pt, &self.points) {
                visible.push(id);
            } else if distance >= -DEFAULT_EPSILON {
                inside = false;
            }
        }

        if !visible.is_empty() {
            HullLocation::Outside(visible)
        } else if inside {
            HullLocation::Inside
        } else {
            HullLocation::OnBoundary
        }
    }

    /// The face lying just below a point located outside of this hull.
    ///
    /// This is the face whose plane is strictly below `pt` and on which the
    /// orthogonal projection of `pt` falls.
    pub fn face_below(&self, pt: &Point<Real>) -> Option<HullFaceId> {
        self.faces
            .iter()
            .filter(|(_, face)| {
                !face.affinely_dependent
                    && face.distance_to_point(pt, &self.points) > 0.0
                    && face.contains_projection(pt, &self.points)
            })
            .min_by(|a, b| {
                let da = a.1.distance_to_point(pt, &self.points);
                let db = b.1.distance_to_point(pt, &self.points);
                da.total_cmp(&db)
            })
            .map(|(id, _)| id)
    }

    /// The face whose vertices are exactly the given hull points, in any order.
    pub fn find_face(&self, pts: [usize; 3]) -> Option<HullFaceId> {
        let mut key = pts;
        key.sort_unstable();

        self.faces
            .iter()
            .find(|(_, face)| {
                let mut face_key = face.pts;
                face_key.sort_unstable();
                face_key == key
            })
            .map(|(id, _)| id)
    }

    /// Inserts a point seen by the faces `visible`, as returned by [`Self::locate`].
    ///
    /// Returns the index of the new point and the identifiers of the new faces.
    pub fn insert_visible(
        &mut self,
        pt: Point<Real>,
        visible: &[HullFaceId],
    ) -> (usize, Vec<HullFaceId>) {
        let removed_edges: HashSet<(usize, usize)> = visible
            .iter()
            .flat_map(|id| self.faces[*id].edges())
            .collect();

        // The horizon is made of the edges shared with faces that are kept.
        let horizon: Vec<(usize, usize)> = visible
            .iter()
            .flat_map(|id| self.faces[*id].edges())
            .filter(|(a, b)| !removed_edges.contains(&(*b, *a)))
            .collect();

        for id in visible {
            let _ = self.faces.remove(*id);
        }

        let new_point = self.points.len();
        self.points.push(pt);

        let new_faces = horizon
            .into_iter()
            .map(|(a, b)| self.faces.insert(HullFace::new(a, b, new_point, &self.points)))
            .collect();

        (new_point, new_faces)
    }

    /// Inserts a point, enlarging this hull if it lies outside of it.
    ///
    /// Returns the index of the point if it was added to the hull.
    pub fn insert(&mut self, pt: Point<Real>) -> Option<usize> {
        match self.locate(&pt) {
            HullLocation::Outside(visible) => Some(self.insert_visible(pt, &visible).0),
            HullLocation::Inside | HullLocation::OnBoundary => None,
        }
    }
}
