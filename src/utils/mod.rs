//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::lattice::{int_floor, int_floor_point, LatticeBox};
pub use self::normals::{common_perpendicular, facet_normal, unit_normal};
pub use self::sorted_pair::SortedPair;
pub use self::subsets::{Subsets, MAX_SUBSET_SIZE};
pub use self::weighted_value::WeightedValue;

mod center;
pub mod hashmap;
mod lattice;
mod normals;
mod sorted_pair;
mod subsets;
mod weighted_value;
