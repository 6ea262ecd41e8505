use crate::core::Belief;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// `(timestep, mean, std_dev)` record handed to reporting sinks.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct BeliefSnapshot {
    pub timestep: u64,
    pub mean: f64,
    pub std_dev: f64,
    /// Whether a measurement was fused at this timestep.
    pub measured: bool,
}

impl BeliefSnapshot {
    pub fn of(timestep: u64, belief: &Belief, measured: bool) -> Self {
        Self {
            timestep,
            mean: belief.mean(),
            std_dev: belief.std_dev(),
            measured,
        }
    }
}

impl Display for BeliefSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "t={}, μ={:.6}, σ={:.6}{}",
            self.timestep,
            self.mean,
            self.std_dev,
            if self.measured { "" } else { " (missed)" }
        )
    }
}
