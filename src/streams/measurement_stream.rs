use crate::core::Reading;
use crate::streams::StreamError;

/// Pull-based source of per-timestep readings.
///
/// Implementations may be finite (recorded logs) or unbounded generators.
/// Timesteps yielded by one stream must be strictly increasing until the next
/// [`restart`](Self::restart).
pub trait MeasurementStream {
    /// Indicates whether the stream *may* produce more readings.
    ///
    /// If it returns `false`, a subsequent call to [`next_reading`](Self::next_reading)
    /// must return `None`.
    fn has_more_readings(&self) -> bool;

    /// Produces the next reading, or `None` once the stream is exhausted.
    ///
    /// A reading whose `measurement` is `None` is a missed observation, not the
    /// end of the stream.
    fn next_reading(&mut self) -> Option<Reading>;

    /// Resets the stream to its initial state. Generators re-seed their RNG.
    fn restart(&mut self) -> Result<(), StreamError>;
}
