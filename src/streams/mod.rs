mod error;
pub mod generators;
mod measurement_stream;

pub use error::StreamError;
pub use measurement_stream::MeasurementStream;
