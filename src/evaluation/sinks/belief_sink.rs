use crate::evaluation::BeliefSnapshot;

/// Consumer of belief snapshots (charts, logs, time-series stores).
pub trait BeliefSink {
    fn record(&mut self, snapshot: BeliefSnapshot);
}
