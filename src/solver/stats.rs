/// Running maximum and average of a reported quantity.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueStats {
    max: usize,
    sum: usize,
    count: usize,
}

impl ValueStats {
    /// Records one more value.
    pub fn report(&mut self, value: usize) {
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    /// The largest recorded value, or zero.
    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    /// The mean of the recorded values, rounded down, or zero.
    #[inline]
    pub fn average(&self) -> usize {
        if self.count > 0 {
            self.sum / self.count
        } else {
            0
        }
    }

    /// The number of recorded values.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Measurements collected during a single search.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// The number of completed iterations.
    pub steps: usize,
    /// The number of evaluations of the inscribed radius.
    pub objective_calls: usize,
    /// The number of convex parts of the pattern.
    pub pattern_convex_parts: usize,
    /// The number of Minkowski sum templates.
    pub minkowski_templates: usize,
    /// The number of facets rasterized per convex part, or of linear systems
    /// of the objective.
    pub geometry_elements: ValueStats,
    /// The sizes of the lattices used.
    pub grid_size: ValueStats,
    /// The number of voxels, or of open subproblems, per iteration.
    pub sampling_size: ValueStats,
}
