mod belief_sink;
mod tracing_sink;

pub use belief_sink::BeliefSink;
pub use tracing_sink::TracingSink;
