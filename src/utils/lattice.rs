use crate::math::{Coordinates, Point, Real, DEFAULT_EPSILON, DIM};

/// Rounds a real number down to an integer, treating values within
/// `DEFAULT_EPSILON` below an integer as that integer.
#[inline]
pub fn int_floor(value: Real) -> i32 {
    let truncated = (value + DEFAULT_EPSILON) as i32;

    if value < -DEFAULT_EPSILON {
        // Truncation rounds toward zero.
        truncated - 1
    } else {
        truncated
    }
}

/// Applies [`int_floor`] to every coordinate of a point.
#[inline]
pub fn int_floor_point(point: &Point<Real>) -> Coordinates {
    [int_floor(point.x), int_floor(point.y), int_floor(point.z)]
}

/// Iterator over every integer coordinate of the half-open box
/// `[origin, origin + size)`.
///
/// The first coordinate varies fastest.
#[derive(Clone, Debug)]
pub struct LatticeBox {
    origin: Coordinates,
    size: Coordinates,
    offset: Coordinates,
    done: bool,
}

impl LatticeBox {
    /// Iterates over the `size[0] × size[1] × size[2]` coordinates starting at `origin`.
    pub fn new(origin: Coordinates, size: Coordinates) -> Self {
        Self {
            origin,
            size,
            offset: [0; DIM],
            done: size.iter().any(|s| *s <= 0),
        }
    }

    /// The number of coordinates this box iterates over.
    pub fn capacity(size: Coordinates) -> usize {
        size.iter().map(|s| (*s).max(0) as usize).product()
    }
}

impl Iterator for LatticeBox {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Coordinates> {
        if self.done {
            return None;
        }

        let result = [
            self.origin[0] + self.offset[0],
            self.origin[1] + self.offset[1],
            self.origin[2] + self.offset[2],
        ];

        self.done = true;
        for i in 0..DIM {
            self.offset[i] += 1;
            if self.offset[i] < self.size[i] {
                self.done = false;
                break;
            }
            self.offset[i] = 0;
        }

        Some(result)
    }
}
