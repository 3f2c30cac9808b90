use crate::math::{Point, Real};
use crate::shape::{Polytope, PolytopeError};
use obj::{Obj, ObjData, ObjError};
use std::io::Read;
use std::path::Path;

/// Indicates an error while reading a polytope from a Wavefront file.
#[derive(thiserror::Error, Debug)]
pub enum ObjLoadError {
    /// The file could not be read or parsed.
    #[error(transparent)]
    Obj(#[from] ObjError),
    /// A face of the file is not a triangle.
    #[error("the face {face} has {num_vertices} vertices instead of three.")]
    NonTriangularFace {
        /// The index of the face, counting the faces of every group.
        face: usize,
        /// The number of vertices of that face.
        num_vertices: usize,
    },
    /// The triangles do not bound a solid.
    #[error(transparent)]
    Polytope(#[from] PolytopeError),
}

impl Polytope {
    /// Loads a polytope from a Wavefront (`.obj`) file.
    ///
    /// Every face of every object and group is used; all of them must be
    /// triangles. The polytope is named after the file stem.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn from_obj_file(path: impl AsRef<Path>) -> Result<Self, ObjLoadError> {
        let path = path.as_ref();
        let Obj { data, .. } = Obj::load(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_obj_data(name, data)
    }

    /// Loads a polytope from the content of a Wavefront (`.obj`) file.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn from_obj_buf(name: impl Into<String>, input: impl Read) -> Result<Self, ObjLoadError> {
        let data = ObjData::load_buf(input)?;
        Self::from_obj_data(name.into(), data)
    }

    fn from_obj_data(name: String, data: ObjData) -> Result<Self, ObjLoadError> {
        let vertices = data
            .position
            .iter()
            .map(|v| Point::new(v[0] as Real, v[1] as Real, v[2] as Real))
            .collect();

        let polys = data
            .objects
            .iter()
            .flat_map(|object| object.groups.iter())
            .flat_map(|group| group.polys.iter());

        let mut facets = Vec::new();
        for (face, poly) in polys.enumerate() {
            if poly.0.len() != 3 {
                return Err(ObjLoadError::NonTriangularFace {
                    face,
                    num_vertices: poly.0.len(),
                });
            }

            facets.push([poly.0[0].0, poly.0[1].0, poly.0[2].0]);
        }

        Ok(Polytope::new(name, vertices, facets)?)
    }
}
