pub mod gaussian;
mod scalar_kalman;

pub use gaussian::{fuse, likelihood};
pub use scalar_kalman::ScalarKalmanFilter;
