use crate::core::EstimatorError;
use serde::Serialize;

/// Per-timestep drift and uncertainty growth applied by the predict step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessModel {
    drift: f64,
    variance: f64,
}

impl ProcessModel {
    pub fn new(drift: f64, variance: f64) -> Result<Self, EstimatorError> {
        if !drift.is_finite() {
            return Err(EstimatorError::invalid("process drift", drift));
        }
        if !(variance.is_finite() && variance >= 0.0) {
            return Err(EstimatorError::invalid("process variance", variance));
        }
        Ok(Self { drift, variance })
    }

    /// Zero-drift model that only inflates uncertainty.
    pub fn stationary(variance: f64) -> Result<Self, EstimatorError> {
        Self::new(0.0, variance)
    }

    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_variance_is_allowed() {
        let m = ProcessModel::new(1.5, 0.0).unwrap();
        assert_eq!(m.drift(), 1.5);
        assert_eq!(m.variance(), 0.0);
    }

    #[test]
    fn negative_or_non_finite_inputs_are_rejected() {
        assert!(ProcessModel::new(0.0, -0.01).is_err());
        assert!(ProcessModel::new(0.0, f64::NAN).is_err());
        assert!(ProcessModel::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn stationary_has_no_drift() {
        let m = ProcessModel::stationary(0.05).unwrap();
        assert_eq!(m.drift(), 0.0);
        assert_eq!(m.variance(), 0.05);
    }
}
