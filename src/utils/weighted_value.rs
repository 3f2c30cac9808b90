use crate::math::Real;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// A value packed with a cost, ordered by cost only.
///
/// Used to turn a `BinaryHeap` into a max-priority queue of arbitrary values.
#[derive(Copy, Clone, Debug)]
pub struct WeightedValue<T> {
    /// The packed value.
    pub value: T,
    /// The cost of the value.
    pub cost: OrderedFloat<Real>,
}

impl<T> WeightedValue<T> {
    /// Creates a new value packed with a cost.
    #[inline]
    pub fn new(value: T, cost: Real) -> WeightedValue<T> {
        WeightedValue {
            value,
            cost: OrderedFloat(cost),
        }
    }
}

impl<T> PartialEq for WeightedValue<T> {
    #[inline]
    fn eq(&self, other: &WeightedValue<T>) -> bool {
        self.cost.eq(&other.cost)
    }
}

impl<T> Eq for WeightedValue<T> {}

impl<T> PartialOrd for WeightedValue<T> {
    #[inline]
    fn partial_cmp(&self, other: &WeightedValue<T>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for WeightedValue<T> {
    #[inline]
    fn cmp(&self, other: &WeightedValue<T>) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}
