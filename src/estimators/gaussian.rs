use crate::core::EstimatorError;
use std::f64::consts::PI;

/// Gaussian density of `x` under `N(mean, variance)`.
///
/// Fails with [`EstimatorError::DivisionByZero`] when `variance <= 0` instead of
/// returning NaN or infinity.
pub fn likelihood(x: f64, mean: f64, variance: f64) -> Result<f64, EstimatorError> {
    if !(variance > 0.0) {
        return Err(EstimatorError::division_by_zero("likelihood"));
    }
    let coef = 1.0 / (2.0 * PI * variance).sqrt();
    let z2 = (x - mean) * (x - mean) / variance;
    Ok(coef * libm::exp(-0.5 * z2))
}

/// Product of two Gaussians, returned as `(mean, variance)`.
///
/// The fused variance is `prior_var·meas_var / (prior_var + meas_var)`, which is
/// strictly below both inputs whenever both are positive. The fused mean is
/// always within `[min(prior_mean, meas_mean), max(prior_mean, meas_mean)]`.
pub fn fuse(
    prior_mean: f64,
    prior_var: f64,
    meas_mean: f64,
    meas_var: f64,
) -> Result<(f64, f64), EstimatorError> {
    let denom = prior_var + meas_var;
    if !(denom > 0.0) || !(prior_var > 0.0) || !(meas_var > 0.0) {
        return Err(EstimatorError::division_by_zero("update"));
    }
    let gain = prior_var / denom;
    let mean = prior_mean + gain * (meas_mean - prior_mean);
    let variance = (prior_var * meas_var) / denom;

    if !mean.is_finite() {
        return Err(EstimatorError::invalid("fused mean", mean));
    }
    if !(variance.is_finite() && variance > 0.0) {
        return Err(EstimatorError::invalid("fused variance", variance));
    }
    let (lo, hi) = if prior_mean <= meas_mean {
        (prior_mean, meas_mean)
    } else {
        (meas_mean, prior_mean)
    };
    Ok((mean.clamp(lo, hi), variance))
}
