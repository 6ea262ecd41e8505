use crate::evaluation::{BeliefSink, BeliefSnapshot};
use tracing::info;

/// Emits one structured log event per snapshot.
#[derive(Debug, Clone)]
pub struct TracingSink {
    track: String,
    recorded: u64,
}

impl TracingSink {
    pub fn new<N: Into<String>>(track: N) -> Self {
        Self {
            track: track.into(),
            recorded: 0,
        }
    }

    pub fn recorded(&self) -> u64 {
        self.recorded
    }
}

impl BeliefSink for TracingSink {
    fn record(&mut self, snapshot: BeliefSnapshot) {
        self.recorded += 1;
        info!(
            track = %self.track,
            timestep = snapshot.timestep,
            mean = snapshot.mean,
            std_dev = snapshot.std_dev,
            measured = snapshot.measured,
            "belief"
        );
    }
}
