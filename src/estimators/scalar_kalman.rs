use crate::core::{Belief, EstimatorError, Measurement, ProcessModel};
use crate::estimators::gaussian;
use tracing::debug;

/// Recursive Bayesian estimator for a single scalar state.
///
/// Owns exactly one live [`Belief`]. Each timestep the caller runs
/// [`predict`](Self::predict) and then, if a reading arrived,
/// [`update`](Self::update); [`step`](Self::step) does both in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarKalmanFilter {
    belief: Belief,
}

impl ScalarKalmanFilter {
    pub fn new(initial_mean: f64, initial_variance: f64) -> Result<Self, EstimatorError> {
        Ok(Self {
            belief: Belief::new(initial_mean, initial_variance)?,
        })
    }

    pub fn from_belief(belief: Belief) -> Self {
        Self { belief }
    }

    #[inline]
    pub fn current_belief(&self) -> Belief {
        self.belief
    }

    pub fn reset(&mut self, belief: Belief) {
        self.belief = belief;
    }

    /// Shifts the mean by the process drift and inflates the variance.
    pub fn predict(&mut self, process: &ProcessModel) -> Result<Belief, EstimatorError> {
        let next = Belief::new(
            self.belief.mean() + process.drift(),
            self.belief.variance() + process.variance(),
        )?;
        self.belief = next;
        Ok(next)
    }

    /// Density of `observed` under the current belief.
    pub fn likelihood(&self, observed: f64) -> Result<f64, EstimatorError> {
        gaussian::likelihood(observed, self.belief.mean(), self.belief.variance())
    }

    /// Fuses an observation into the current belief.
    pub fn update(
        &mut self,
        observed: f64,
        observation_variance: f64,
    ) -> Result<Belief, EstimatorError> {
        let measurement = Measurement::new(observed, observation_variance)?;
        self.apply(&measurement)
    }

    /// Predict, then update when a measurement is present.
    ///
    /// A missing measurement leaves the predicted belief as the result. On any
    /// error the belief is restored to its value before the call.
    pub fn step(
        &mut self,
        process: &ProcessModel,
        measurement: Option<Measurement>,
    ) -> Result<Belief, EstimatorError> {
        let before = self.belief;
        let predicted = self.predict(process)?;
        let Some(m) = measurement else {
            debug!(mean = predicted.mean(), variance = predicted.variance(), "missed reading");
            return Ok(predicted);
        };
        match self.apply(&m) {
            Ok(b) => Ok(b),
            Err(e) => {
                self.belief = before;
                Err(e)
            }
        }
    }

    fn apply(&mut self, m: &Measurement) -> Result<Belief, EstimatorError> {
        let (mean, variance) = gaussian::fuse(
            self.belief.mean(),
            self.belief.variance(),
            m.value(),
            m.noise_variance(),
        )?;
        let next = Belief::new(mean, variance)?;
        self.belief = next;
        Ok(next)
    }
}
