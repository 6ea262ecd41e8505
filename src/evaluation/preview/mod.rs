mod belief_snapshot;
mod belief_trace;

pub use belief_snapshot::BeliefSnapshot;
pub use belief_trace::{BeliefTrace, TraceFormat};
