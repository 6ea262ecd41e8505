mod belief;
mod error;
mod measurement;
mod process_model;

pub use belief::Belief;
pub use error::EstimatorError;
pub use measurement::{Measurement, Reading};
pub use process_model::ProcessModel;
