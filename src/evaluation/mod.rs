mod preview;
mod sinks;
mod statistics;

pub use preview::{BeliefSnapshot, BeliefTrace, TraceFormat};
pub use sinks::{BeliefSink, TracingSink};
pub use statistics::{ErrorStatistics, OnlineStatistic};
