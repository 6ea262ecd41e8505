use crate::core::EstimatorError;
use serde::Serialize;

/// A single noisy observation with known noise variance.
///
/// A missed reading is modelled as `Option<Measurement>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    value: f64,
    noise_variance: f64,
}

impl Measurement {
    pub fn new(value: f64, noise_variance: f64) -> Result<Self, EstimatorError> {
        if !value.is_finite() {
            return Err(EstimatorError::invalid("observed value", value));
        }
        if !(noise_variance.is_finite() && noise_variance > 0.0) {
            return Err(EstimatorError::invalid(
                "observation variance",
                noise_variance,
            ));
        }
        Ok(Self {
            value,
            noise_variance,
        })
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn noise_variance(&self) -> f64 {
        self.noise_variance
    }
}

/// One timestep of output from a measurement stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub timestep: u64,
    pub measurement: Option<Measurement>,
    /// Hidden value at this timestep, when the source knows it.
    pub truth: Option<f64>,
}

impl Reading {
    #[inline]
    pub fn is_missed(&self) -> bool {
        self.measurement.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_noise() {
        let m = Measurement::new(18.0, 144.0).unwrap();
        assert_eq!(m.value(), 18.0);
        assert_eq!(m.noise_variance(), 144.0);
    }

    #[test]
    fn rejects_zero_noise_and_nan_value() {
        assert!(Measurement::new(1.0, 0.0).is_err());
        assert!(Measurement::new(1.0, -2.0).is_err());
        assert!(Measurement::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn reading_reports_missed() {
        let r = Reading {
            timestep: 4,
            measurement: None,
            truth: Some(1.0),
        };
        assert!(r.is_missed());
    }
}
