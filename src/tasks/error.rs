use crate::core::EstimatorError;
use crate::streams::StreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Estimator(#[from] EstimatorError),

    #[error(transparent)]
    Stream(#[from] StreamError),
}
