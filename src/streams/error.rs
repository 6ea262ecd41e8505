use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
