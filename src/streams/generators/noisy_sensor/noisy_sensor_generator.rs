use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::core::{Measurement, Reading};
use crate::streams::{MeasurementStream, StreamError};

/// Simulated sensor observing a drifting scalar through Gaussian noise.
///
/// The hidden value starts at `start` and moves by `truth_drift` every
/// timestep. Each reading is `truth + N(0, noise_std_dev)`, withheld with
/// probability `dropout_probability`. Noise is drawn before the dropout roll so
/// two generators with the same seed see the same noise regardless of their
/// dropout probability.
#[derive(Debug)]
pub struct NoisySensorGenerator {
    seed: u64,
    rng: StdRng,
    noise: Normal<f64>,
    start: f64,
    truth_drift: f64,
    noise_variance: f64,
    dropout_probability: f64,
    max_timesteps: Option<u64>,
    produced: u64,
}

impl NoisySensorGenerator {
    pub fn new(
        start: f64,
        truth_drift: f64,
        noise_std_dev: f64,
        dropout_probability: f64,
        max_timesteps: Option<u64>,
        seed: u64,
    ) -> Result<Self, StreamError> {
        if !start.is_finite() || !truth_drift.is_finite() {
            return Err(StreamError::InvalidParameter(
                "start and truth drift must be finite".into(),
            ));
        }
        if !(noise_std_dev.is_finite() && noise_std_dev > 0.0) {
            return Err(StreamError::InvalidParameter(
                "noise standard deviation must be > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&dropout_probability) {
            return Err(StreamError::InvalidParameter(
                "dropout probability must be in [0.0, 1.0]".into(),
            ));
        }
        let noise = Normal::new(0.0, noise_std_dev)
            .map_err(|e| StreamError::InvalidParameter(e.to_string()))?;

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            noise,
            start,
            truth_drift,
            noise_variance: noise_std_dev * noise_std_dev,
            dropout_probability,
            max_timesteps,
            produced: 0,
        })
    }

    #[inline]
    pub fn dropout_probability(&self) -> f64 {
        self.dropout_probability
    }

    #[inline]
    pub fn noise_variance(&self) -> f64 {
        self.noise_variance
    }

    #[inline]
    fn truth_at(&self, timestep: u64) -> f64 {
        self.start + self.truth_drift * timestep as f64
    }
}

impl MeasurementStream for NoisySensorGenerator {
    fn has_more_readings(&self) -> bool {
        self.max_timesteps.map_or(true, |max| self.produced < max)
    }

    fn next_reading(&mut self) -> Option<Reading> {
        if !self.has_more_readings() {
            return None;
        }
        self.produced += 1;
        let timestep = self.produced;
        let truth = self.truth_at(timestep);

        let observed = truth + self.noise.sample(&mut self.rng);
        let dropped = self.rng.random_bool(self.dropout_probability);

        let measurement = if dropped {
            None
        } else {
            Measurement::new(observed, self.noise_variance).ok()
        };

        Some(Reading {
            timestep,
            measurement,
            truth: Some(truth),
        })
    }

    fn restart(&mut self) -> Result<(), StreamError> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(generator: &mut NoisySensorGenerator, n: usize) -> Vec<Reading> {
        (0..n)
            .map(|_| generator.next_reading().expect("reading"))
            .collect()
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(matches!(
            NoisySensorGenerator::new(0.0, 1.0, 0.0, 0.1, None, 1).unwrap_err(),
            StreamError::InvalidParameter(_)
        ));
        assert!(NoisySensorGenerator::new(0.0, 1.0, -2.0, 0.1, None, 1).is_err());
        assert!(NoisySensorGenerator::new(0.0, 1.0, 1.0, -0.1, None, 1).is_err());
        assert!(NoisySensorGenerator::new(0.0, 1.0, 1.0, 1.1, None, 1).is_err());
        assert!(NoisySensorGenerator::new(f64::NAN, 1.0, 1.0, 0.5, None, 1).is_err());
    }

    #[test]
    fn timesteps_start_at_one_and_truth_drifts() {
        let mut generator = NoisySensorGenerator::new(1.0, 1.0, 12.0, 0.0, Some(5), 42).unwrap();
        let readings = take(&mut generator, 5);
        for (i, r) in readings.iter().enumerate() {
            assert_eq!(r.timestep, i as u64 + 1);
            assert_eq!(r.truth, Some(1.0 + (i as f64 + 1.0)));
        }
        assert!(!generator.has_more_readings());
        assert!(generator.next_reading().is_none());
    }

    #[test]
    fn zero_dropout_always_measures_and_full_dropout_never_does() {
        let mut always = NoisySensorGenerator::new(0.0, 0.0, 1.0, 0.0, None, 7).unwrap();
        assert!(take(&mut always, 200).iter().all(|r| r.measurement.is_some()));

        let mut never = NoisySensorGenerator::new(0.0, 0.0, 1.0, 1.0, None, 7).unwrap();
        assert!(take(&mut never, 200).iter().all(|r| r.is_missed()));
    }

    #[test]
    fn measurements_carry_configured_noise_variance() {
        let mut generator = NoisySensorGenerator::new(0.0, 0.0, 12.0, 0.0, None, 3).unwrap();
        let r = generator.next_reading().unwrap();
        assert_eq!(r.measurement.unwrap().noise_variance(), 144.0);
        assert_eq!(generator.noise_variance(), 144.0);
    }

    #[test]
    fn sample_mean_of_noise_is_near_zero() {
        let mut generator = NoisySensorGenerator::new(5.0, 0.0, 2.0, 0.0, None, 2025).unwrap();
        let n = 5_000;
        let sum: f64 = take(&mut generator, n)
            .iter()
            .map(|r| r.measurement.unwrap().value() - 5.0)
            .sum();
        let mean = sum / n as f64;
        assert!(mean.abs() < 0.15, "noise mean={mean}");
    }

    #[test]
    fn dropout_rate_is_roughly_respected() {
        let mut generator = NoisySensorGenerator::new(0.0, 0.0, 1.0, 0.5, None, 99).unwrap();
        let missed = take(&mut generator, 4_000)
            .iter()
            .filter(|r| r.is_missed())
            .count();
        let rate = missed as f64 / 4_000.0;
        assert!((rate - 0.5).abs() < 0.05, "rate={rate}");
    }

    #[test]
    fn same_seed_same_noise_regardless_of_dropout() {
        let mut a = NoisySensorGenerator::new(0.0, 1.0, 3.0, 0.0, None, 11).unwrap();
        let mut b = NoisySensorGenerator::new(0.0, 1.0, 3.0, 0.9, None, 11).unwrap();
        for (ra, rb) in take(&mut a, 100).iter().zip(take(&mut b, 100).iter()) {
            if let Some(mb) = rb.measurement {
                assert_eq!(ra.measurement.unwrap().value(), mb.value());
            }
        }
    }

    #[test]
    fn restart_resets_sequence_with_same_seed() {
        let mut generator = NoisySensorGenerator::new(1.0, 0.5, 4.0, 0.3, Some(50), 12345).unwrap();
        let first = take(&mut generator, 30);
        generator.restart().unwrap();
        let second = take(&mut generator, 30);
        assert_eq!(first, second);
    }
}
