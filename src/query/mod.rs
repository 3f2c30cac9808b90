//! Non-persistent geometric queries.
//!
//! # General cases
//! * [`locate_point`] classifies a point against a closed triangulated boundary
//!   by counting the facets crossed by a vertical ray.
//! * [`AxisDistance`] computes the distance along that ray to a single facet.
//! * The [`sat`] module contains separating-axis overlap tests between facets,
//!   tetrahedra and axis-aligned boxes.

pub use self::axis_distance::{AxisDistance, AxisDistanceResult};
pub use self::location::{
    classify_crossings, dedup_crossings, locate_point, location_in_face, Location,
};

mod axis_distance;
mod location;
pub mod sat;
