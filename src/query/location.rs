use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::{AxisDistance, AxisDistanceResult};
use crate::shape::Facet;

/// Location of a point relative to a solid or a face.
///
/// The variants are ordered: `Outer < Boundary < Inner`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Location {
    /// Strictly outside.
    #[default]
    Outer = 0,
    /// Within the tolerance of the boundary.
    Boundary,
    /// Strictly inside.
    Inner,
}

impl Location {
    /// Is this anything but [`Location::Outer`]?
    #[inline]
    pub fn is_hit(self) -> bool {
        self != Location::Outer
    }
}

/// Locates a point given by its coordinates in the affine basis of a face.
///
/// `coordinates` are the weights of all the face vertices but the first
/// one, so a triangle has two of them.
pub fn location_in_face(coordinates: &[Real]) -> Location {
    let mut sum = 0.0;
    let mut boundary = false;

    for coordinate in coordinates {
        if *coordinate < -DEFAULT_EPSILON || *coordinate > 1.0 + DEFAULT_EPSILON {
            return Location::Outer;
        } else if *coordinate < DEFAULT_EPSILON || *coordinate > 1.0 - DEFAULT_EPSILON {
            boundary = true;
        }
        sum += *coordinate;
    }

    if sum > 1.0 + DEFAULT_EPSILON {
        return Location::Outer;
    } else if sum > 1.0 - DEFAULT_EPSILON {
        boundary = true;
    }

    if boundary {
        Location::Boundary
    } else {
        Location::Inner
    }
}

/// Sorts ray crossings by distance and merges those equal up to the tolerance.
///
/// Two crossings are merged when their distances differ by less than
/// `DEFAULT_EPSILON` and their locations match, so that a ray going through an
/// edge or a vertex shared by several facets counts once.
pub fn dedup_crossings(crossings: &mut Vec<AxisDistanceResult>) {
    crossings.sort_by(|a, b| a.value.total_cmp(&b.value));

    let mut result: Vec<AxisDistanceResult> = Vec::with_capacity(crossings.len());
    for crossing in crossings.drain(..) {
        let duplicate = result
            .iter()
            .rev()
            .take_while(|kept| crossing.value - kept.value < DEFAULT_EPSILON)
            .any(|kept| kept.location == crossing.location);

        if !duplicate {
            result.push(crossing);
        }
    }

    *crossings = result;
}

/// Classifies a point from the deduplicated, sorted crossings of the vertical
/// ray starting at this point.
///
/// Only crossings with a distance of at least `lower_bound - DEFAULT_EPSILON`
/// are considered.
pub fn classify_crossings(crossings: &[AxisDistanceResult], lower_bound: Real) -> Location {
    let first_above = crossings.partition_point(|c| c.value < lower_bound - DEFAULT_EPSILON);
    let above = &crossings[first_above..];

    match above.first() {
        Some(nearest) if nearest.value < lower_bound + DEFAULT_EPSILON => Location::Boundary,
        _ if above.len() % 2 == 1 => Location::Inner,
        _ => Location::Outer,
    }
}

/// Locates a point relative to the solid bounded by `facets`.
///
/// The facets must form a closed boundary. The point is on the boundary if a
/// facet lies within the tolerance above it; otherwise the parity of the number
/// of facets crossed by the upward vertical ray tells whether it is inside.
pub fn locate_point<'a>(point: &Point<Real>, facets: impl IntoIterator<Item = &'a Facet>) -> Location {
    let mut crossings: Vec<_> = facets
        .into_iter()
        .map(|facet| AxisDistance::new(facet).eval(point))
        .filter(|distance| distance.is_hit() && distance.value > -DEFAULT_EPSILON)
        .collect();

    dedup_crossings(&mut crossings);
    classify_crossings(&crossings, 0.0)
}
