/// Online scalar statistic fed one value at a time.
///
/// Implementations accept values incrementally via [`add`] and expose the
/// current estimate via [`estimation`].
pub trait OnlineStatistic {
    /// Incorporates a new observation. NaN inputs are ignored.
    fn add(&mut self, v: f64);

    /// Returns the current estimate, or NaN before any observation.
    fn estimation(&self) -> f64;
}
