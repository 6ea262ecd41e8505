use crate::evaluation::statistics::OnlineStatistic;
use serde::Serialize;

/// Streaming mean and population standard deviation of an error signal.
///
/// Uses Welford's update so long runs do not lose precision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorStatistics {
    count: u64,
    mean: f64,
    m2: f64,
}

impl ErrorStatistics {
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count > 0 { self.mean } else { f64::NAN }
    }

    pub fn variance(&self) -> f64 {
        if self.count > 0 {
            self.m2 / self.count as f64
        } else {
            f64::NAN
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl OnlineStatistic for ErrorStatistics {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.count += 1;
        let delta = v - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (v - self.mean);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        self.mean()
    }
}
