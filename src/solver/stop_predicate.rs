use crate::math::{Real, DEFAULT_EPSILON};
use std::time::Duration;

/// Indicates an invalid stopping criterion.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum StopPredicateError {
    /// The requested precision cannot be reached with the geometric tolerance.
    #[error("the target precision {0} is below the smallest meaningful precision.")]
    PrecisionTooSmall(Real),
    /// None of the stopping criteria was given.
    #[error("at least one stopping criterion must be given.")]
    NoCriterion,
}

/// When to stop an iterative search.
///
/// The search stops as soon as any criterion is met: the precision of the
/// solution is below the target precision, the solution radius is above the
/// target value, or the search ran for longer than the maximum duration.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StopPredicate {
    target_precision: Real,
    target_value: Real,
    max_duration: Duration,
}

impl Default for StopPredicate {
    fn default() -> Self {
        Self {
            target_precision: Self::MIN_PRECISION,
            target_value: Real::MAX,
            max_duration: Self::DEFAULT_MAX_DURATION,
        }
    }
}

impl StopPredicate {
    /// The smallest precision a search can be asked for.
    pub const MIN_PRECISION: Real = 4.0 * DEFAULT_EPSILON;
    /// The duration limit used when none is given: 72 hours.
    pub const DEFAULT_MAX_DURATION: Duration = Duration::from_secs(72 * 3600);

    /// Creates a stop predicate from optional criteria.
    ///
    /// A target value alone must be reachable, otherwise the search only
    /// stops after the default duration.
    pub fn new(
        target_precision: Option<Real>,
        target_value: Option<Real>,
        max_duration: Option<Duration>,
    ) -> Result<Self, StopPredicateError> {
        if target_precision.is_none() && target_value.is_none() && max_duration.is_none() {
            return Err(StopPredicateError::NoCriterion);
        }

        let target_precision = target_precision.unwrap_or(Self::MIN_PRECISION);
        if target_precision.is_nan() || target_precision < Self::MIN_PRECISION {
            return Err(StopPredicateError::PrecisionTooSmall(target_precision));
        }

        Ok(Self {
            target_precision,
            target_value: target_value.unwrap_or(Real::MAX),
            max_duration: max_duration.unwrap_or(Self::DEFAULT_MAX_DURATION),
        })
    }

    /// Stops once the solution is known up to `target_precision`.
    pub fn with_precision(target_precision: Real) -> Result<Self, StopPredicateError> {
        Self::new(Some(target_precision), None, None)
    }

    /// Replaces the duration limit of this predicate.
    pub fn with_max_duration(mut self, max_duration: Duration) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// The precision below which the search stops.
    #[inline]
    pub fn target_precision(&self) -> Real {
        self.target_precision
    }

    /// The radius above which the search stops.
    #[inline]
    pub fn target_value(&self) -> Real {
        self.target_value
    }

    /// The maximal running time of the search.
    #[inline]
    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    /// Should a search with the given state stop?
    pub fn is_satisfied(&self, precision: Real, value: Real, run_time: Duration) -> bool {
        run_time > self.max_duration
            || precision < self.target_precision
            || value > self.target_value
    }
}

#[cfg(test)]
mod test {
    use super::{StopPredicate, StopPredicateError};
    use std::time::Duration;

    #[test]
    fn defaults() {
        let stop = StopPredicate::new(None, Some(2.0), None).unwrap();
        assert_eq!(stop.target_precision(), StopPredicate::MIN_PRECISION);
        assert_eq!(stop.max_duration(), Duration::from_secs(259_200));
        assert!(stop.is_satisfied(1.0, 2.5, Duration::ZERO));
        assert!(!stop.is_satisfied(1.0, 1.5, Duration::ZERO));
    }

    #[test]
    fn invalid_criteria() {
        assert_eq!(
            StopPredicate::new(None, None, None),
            Err(StopPredicateError::NoCriterion)
        );
        assert_eq!(
            StopPredicate::with_precision(1.0e-10),
            Err(StopPredicateError::PrecisionTooSmall(1.0e-10))
        );
        assert!(StopPredicate::with_precision(2.0e-10).is_ok());
    }

    #[test]
    fn any_criterion_stops() {
        let stop = StopPredicate::with_precision(1.0e-3)
            .unwrap()
            .with_max_duration(Duration::from_secs(1));
        assert!(stop.is_satisfied(1.0e-4, 0.0, Duration::ZERO));
        assert!(stop.is_satisfied(1.0, 0.0, Duration::from_secs(2)));
        assert!(!stop.is_satisfied(1.0, 0.0, Duration::from_millis(500)));
    }
}
