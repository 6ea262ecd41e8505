mod build;
mod error;
mod loader;
mod parameters;

pub use error::ConfigError;
pub use parameters::{
    BeliefParameters, OutputParameters, ProcessParameters, SensorParameters, SweepParameters,
    TrackParameters, TrackingConfig,
};
