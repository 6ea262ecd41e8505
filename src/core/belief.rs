use crate::core::EstimatorError;
use crate::utils::math::normal_probability;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Gaussian belief over a scalar hidden state.
///
/// The variance is always strictly positive and finite; [`Belief::new`] is the
/// only way to build one from raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Belief {
    mean: f64,
    variance: f64,
}

impl Belief {
    pub fn new(mean: f64, variance: f64) -> std::result::Result<Self, EstimatorError> {
        if !mean.is_finite() {
            return Err(EstimatorError::invalid("mean", mean));
        }
        if !(variance.is_finite() && variance > 0.0) {
            return Err(EstimatorError::invalid("variance", variance));
        }
        Ok(Self { mean, variance })
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Interval `mean ± k·σ`, lower bound first.
    pub fn sigma_band(&self, k: f64) -> (f64, f64) {
        let half = k.abs() * self.std_dev();
        (self.mean - half, self.mean + half)
    }

    /// Probability mass of this belief inside `mean ± k·σ`.
    pub fn probability_within(&self, k: f64) -> f64 {
        let k = k.abs();
        normal_probability(k) - normal_probability(-k)
    }
}

impl Display for Belief {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "μ={:.6}, σ={:.6}", self.mean, self.std_dev())
    }
}
