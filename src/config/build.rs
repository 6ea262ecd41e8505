use crate::config::{
    BeliefParameters, ConfigError, ProcessParameters, SensorParameters, TrackParameters,
    TrackingConfig,
};
use crate::core::{Belief, EstimatorError, ProcessModel};
use crate::estimators::ScalarKalmanFilter;
use crate::streams::StreamError;
use crate::streams::generators::NoisySensorGenerator;
use crate::tasks::{DropoutSweep, TrackingRun};
use std::convert::TryFrom;

impl TryFrom<&BeliefParameters> for Belief {
    type Error = EstimatorError;

    fn try_from(p: &BeliefParameters) -> Result<Self, Self::Error> {
        Belief::new(p.mean, p.variance)
    }
}

impl TryFrom<&ProcessParameters> for ProcessModel {
    type Error = EstimatorError;

    fn try_from(p: &ProcessParameters) -> Result<Self, Self::Error> {
        ProcessModel::new(p.drift, p.variance)
    }
}

impl TryFrom<SensorParameters> for NoisySensorGenerator {
    type Error = StreamError;

    fn try_from(p: SensorParameters) -> Result<Self, Self::Error> {
        NoisySensorGenerator::new(
            p.start,
            p.truth_drift,
            p.noise_std_dev,
            p.dropout_probability,
            p.max_timesteps,
            p.seed,
        )
    }
}

impl TrackParameters {
    pub fn build_run(
        &self,
        max_timesteps: Option<u64>,
        sample_frequency: u64,
    ) -> Result<TrackingRun, ConfigError> {
        let belief = Belief::try_from(&self.initial)?;
        let process = ProcessModel::try_from(&self.process)?;
        let sensor = NoisySensorGenerator::try_from(self.sensor.clone())?;

        TrackingRun::new(
            ScalarKalmanFilter::from_belief(belief),
            Box::new(sensor),
            process,
            max_timesteps,
            sample_frequency,
        )
        .map_err(ConfigError::from)
    }
}

impl TrackingConfig {
    /// One run per track, in configuration order, paired with the track name.
    pub fn build_runs(&self) -> Result<Vec<(String, TrackingRun)>, ConfigError> {
        self.tracks
            .iter()
            .map(|t| {
                let run = t.build_run(self.max_timesteps, self.sample_frequency)?;
                Ok((t.name.clone(), run))
            })
            .collect()
    }

    /// `None` when the sweep is disabled.
    pub fn build_sweep(&self) -> Result<Option<DropoutSweep>, ConfigError> {
        let Some(sweep) = &self.sweep else {
            return Ok(None);
        };
        let track = match &sweep.track {
            Some(name) => self.track(name).ok_or_else(|| {
                ConfigError::InvalidParameter(format!("sweep track '{name}' is not configured"))
            })?,
            None => self
                .tracks
                .first()
                .ok_or_else(|| ConfigError::InvalidParameter("no tracks configured".into()))?,
        };
        let sweep = DropoutSweep::new(
            Belief::try_from(&track.initial)?,
            ProcessModel::try_from(&track.process)?,
            track.sensor.clone(),
            sweep.dropout_probabilities.clone(),
            sweep.timesteps,
        )?;
        Ok(Some(sweep))
    }
}
