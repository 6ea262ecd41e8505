pub mod config;
pub mod core;
pub mod estimators;
pub mod evaluation;
pub mod streams;
pub mod tasks;
pub mod utils;

pub use crate::core::{Belief, EstimatorError, Measurement, ProcessModel, Reading};
pub use crate::estimators::ScalarKalmanFilter;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
