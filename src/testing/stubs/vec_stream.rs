use crate::core::{Measurement, Reading};
use crate::streams::{MeasurementStream, StreamError};

/// Replays a fixed list of observations; `None` entries are missed readings.
pub struct VecStream {
    pub values: Vec<Option<f64>>,
    pub noise_variance: f64,
    idx: usize,
}

impl VecStream {
    pub fn new(values: Vec<Option<f64>>, noise_variance: f64) -> Self {
        Self {
            values,
            noise_variance,
            idx: 0,
        }
    }
}

impl MeasurementStream for VecStream {
    fn has_more_readings(&self) -> bool {
        self.idx < self.values.len()
    }

    fn next_reading(&mut self) -> Option<Reading> {
        if !self.has_more_readings() {
            return None;
        }

        let value = self.values[self.idx];
        self.idx += 1;
        Some(Reading {
            timestep: self.idx as u64,
            measurement: value.and_then(|v| Measurement::new(v, self.noise_variance).ok()),
            truth: None,
        })
    }

    fn restart(&mut self) -> Result<(), StreamError> {
        self.idx = 0;
        Ok(())
    }
}
