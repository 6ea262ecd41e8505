mod error_statistics;
mod online_statistic;

pub use error_statistics::ErrorStatistics;
pub use online_statistic::OnlineStatistic;
