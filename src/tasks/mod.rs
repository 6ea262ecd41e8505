mod dropout_sweep;
mod error;
mod tracking_run;

pub use dropout_sweep::{DEFAULT_DROPOUT_PROBABILITIES, DropoutOutcome, DropoutSweep};
pub use error::TaskError;
pub use tracking_run::{RunSummary, TrackingRun};
