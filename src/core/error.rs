use thiserror::Error;

/// Failures reported by the estimator and the Gaussian primitives.
///
/// Every operation that returns one of these leaves the filter's stored
/// belief exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("invalid model: {what} = {value}")]
    InvalidModel { what: &'static str, value: f64 },

    #[error("division by zero in {operation}")]
    DivisionByZero { operation: &'static str },
}

impl EstimatorError {
    #[inline]
    pub(crate) fn invalid(what: &'static str, value: f64) -> Self {
        EstimatorError::InvalidModel { what, value }
    }

    #[inline]
    pub(crate) fn division_by_zero(operation: &'static str) -> Self {
        EstimatorError::DivisionByZero { operation }
    }
}
