use crate::core::EstimatorError;
use crate::streams::StreamError;
use crate::tasks::TaskError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Estimator(#[from] EstimatorError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    Task(#[from] TaskError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
