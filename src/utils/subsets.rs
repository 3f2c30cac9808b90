use arrayvec::ArrayVec;

/// The largest subset size [`Subsets`] can enumerate.
pub const MAX_SUBSET_SIZE: usize = 4;

/// Iterator over the index subsets of a given size of `0..len`.
///
/// Subsets are yielded in lexicographic order, each sorted increasingly.
#[derive(Clone, Debug)]
pub struct Subsets {
    len: usize,
    indices: ArrayVec<usize, MAX_SUBSET_SIZE>,
    done: bool,
}

impl Subsets {
    /// Enumerates the subsets of `size` elements among `len`.
    pub fn new(len: usize, size: usize) -> Self {
        assert!(size <= MAX_SUBSET_SIZE);
        Self {
            len,
            indices: (0..size).collect(),
            done: size > len,
        }
    }

    /// Collects the elements of `set` selected by `indices`.
    pub fn select<T: Copy>(set: &[T], indices: &[usize]) -> ArrayVec<T, MAX_SUBSET_SIZE> {
        indices.iter().map(|i| set[*i]).collect()
    }
}

impl Iterator for Subsets {
    type Item = ArrayVec<usize, MAX_SUBSET_SIZE>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices.clone();
        let size = self.indices.len();

        // Find the rightmost index that can still be incremented.
        let mut i = size;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.len - size + i {
                self.indices[i] += 1;
                for j in i + 1..size {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }
}
