use crate::config::SensorParameters;
use crate::core::{Belief, ProcessModel};
use crate::estimators::ScalarKalmanFilter;
use crate::evaluation::ErrorStatistics;
use crate::streams::generators::NoisySensorGenerator;
use crate::tasks::{TaskError, TrackingRun};
use tracing::info;

pub const DEFAULT_DROPOUT_PROBABILITIES: [f64; 3] = [0.1, 0.5, 0.9];

/// Result of tracking one simulated sensor at a given dropout probability.
#[derive(Debug, Clone)]
pub struct DropoutOutcome {
    pub dropout_probability: f64,
    pub measured: u64,
    pub missed: u64,
    pub estimation_error: ErrorStatistics,
    pub final_belief: Belief,
}

/// Runs the same filter and sensor at several dropout probabilities.
///
/// Every run starts from the same initial belief and re-seeds the sensor with
/// the same seed, so outcomes differ only by which readings were withheld.
pub struct DropoutSweep {
    initial: Belief,
    process: ProcessModel,
    sensor: SensorParameters,
    probabilities: Vec<f64>,
    timesteps: u64,
}

impl DropoutSweep {
    pub fn new(
        initial: Belief,
        process: ProcessModel,
        sensor: SensorParameters,
        probabilities: Vec<f64>,
        timesteps: u64,
    ) -> Result<Self, TaskError> {
        if probabilities.is_empty() {
            return Err(TaskError::InvalidParameter(
                "at least one dropout probability is required".into(),
            ));
        }
        if let Some(p) = probabilities.iter().find(|p| !(0.0..=1.0).contains(*p)) {
            return Err(TaskError::InvalidParameter(format!(
                "dropout probability {p} is outside [0.0, 1.0]"
            )));
        }
        if timesteps == 0 {
            return Err(TaskError::InvalidParameter("timesteps must be > 0".into()));
        }
        Ok(Self {
            initial,
            process,
            sensor,
            probabilities,
            timesteps,
        })
    }

    pub fn run(&self) -> Result<Vec<DropoutOutcome>, TaskError> {
        self.probabilities
            .iter()
            .map(|&p| self.run_one(p))
            .collect()
    }

    fn run_one(&self, dropout_probability: f64) -> Result<DropoutOutcome, TaskError> {
        let params = SensorParameters {
            dropout_probability,
            max_timesteps: Some(self.timesteps),
            ..self.sensor.clone()
        };
        let sensor = NoisySensorGenerator::try_from(params)?;
        let filter = ScalarKalmanFilter::from_belief(self.initial);

        let mut run = TrackingRun::new(
            filter,
            Box::new(sensor),
            self.process,
            Some(self.timesteps),
            self.timesteps,
        )?;
        let summary = run.run()?;

        info!(
            pfail = dropout_probability,
            mean_error = summary.estimation_error.mean(),
            std_dev = summary.estimation_error.std_dev(),
            missed = summary.missed,
            "dropout sweep"
        );

        Ok(DropoutOutcome {
            dropout_probability,
            measured: summary.measured,
            missed: summary.missed,
            estimation_error: summary.estimation_error,
            final_belief: summary.final_belief,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensor() -> SensorParameters {
        SensorParameters {
            start: 1.0,
            truth_drift: 1.0,
            noise_std_dev: 12.0,
            dropout_probability: 0.0,
            max_timesteps: None,
            seed: 42,
        }
    }

    fn sweep(probabilities: Vec<f64>, timesteps: u64) -> Result<DropoutSweep, TaskError> {
        DropoutSweep::new(
            Belief::new(1.0, 1.0).unwrap(),
            ProcessModel::new(1.0, 0.05).unwrap(),
            sensor(),
            probabilities,
            timesteps,
        )
    }

    #[test]
    fn ctor_guards() {
        assert!(matches!(
            sweep(vec![], 10).err().unwrap(),
            TaskError::InvalidParameter(_)
        ));
        assert!(sweep(vec![0.1, 1.5], 10).is_err());
        assert!(sweep(vec![0.1], 0).is_err());
    }

    #[test]
    fn one_outcome_per_probability_in_order() {
        let outcomes = sweep(DEFAULT_DROPOUT_PROBABILITIES.to_vec(), 500)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(outcomes.len(), 3);
        for (o, p) in outcomes.iter().zip(DEFAULT_DROPOUT_PROBABILITIES) {
            assert_eq!(o.dropout_probability, p);
            assert_eq!(o.measured + o.missed, 500);
            assert_eq!(o.estimation_error.count(), 500);
        }
    }

    #[test]
    fn more_dropout_means_more_missed_readings() {
        let outcomes = sweep(vec![0.0, 0.5, 1.0], 400).unwrap().run().unwrap();
        assert_eq!(outcomes[0].missed, 0);
        assert!(outcomes[1].missed > 0 && outcomes[1].missed < 400);
        assert_eq!(outcomes[2].missed, 400);
        assert!(outcomes[0].missed < outcomes[1].missed);
    }

    #[test]
    fn full_dropout_reduces_to_pure_prediction() {
        let outcomes = sweep(vec![1.0], 20).unwrap().run().unwrap();
        let b = outcomes[0].final_belief;
        assert!((b.mean() - 21.0).abs() < 1e-9);
        assert!((b.variance() - (1.0 + 20.0 * 0.05)).abs() < 1e-9);
        // prediction tracks a truth that drifts at the same rate
        assert!(outcomes[0].estimation_error.mean().abs() < 1e-9);
    }
}
