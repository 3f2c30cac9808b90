use super::DomainEstimator;
use crate::grid::{shrink, Sampling, SparseRaster};
use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::Location;
use crate::solver::SolverStats;

/// Strategies bounding the gap between the optimal radius and a radius that
/// could not be improved by a given step.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AccuracyEstimator {
    /// The step plus the largest variation of the radius within a voxel.
    #[default]
    Lipschitzian,
    /// Probes larger and larger radii until no voxel may be feasible, or the
    /// gap exceeds the target precision.
    General,
}

impl AccuracyEstimator {
    /// Bounds the gap after the failure of growing `radius` by `step` over the
    /// voxels of `sampling`.
    ///
    /// `grid_lipschitz_constant` bounds the variation of the radius per voxel
    /// side.
    pub fn estimate(
        &self,
        domain: &DomainEstimator,
        sampling: &Sampling,
        radius: Real,
        step: Real,
        target_precision: Real,
        grid_lipschitz_constant: Real,
        stats: &mut SolverStats,
    ) -> Real {
        match self {
            AccuracyEstimator::Lipschitzian => {
                step + grid_lipschitz_constant * sampling.mapper().grid_step()
            }
            AccuracyEstimator::General => {
                let mut result = step;
                let mut trial = Sampling::new(
                    *sampling.mapper(),
                    SparseRaster::from_selection(sampling.raster().coordinates(), Location::Outer),
                );

                while result < target_precision + DEFAULT_EPSILON {
                    let estimate = domain.estimate(&trial, radius + result, stats);
                    if !estimate.raster().voxels().iter().any(|v| v.value.is_hit()) {
                        break;
                    }

                    result += step;
                    trial = shrink(&estimate);
                }

                result
            }
        }
    }
}
