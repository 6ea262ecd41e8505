use crate::core::{Belief, ProcessModel, Reading};
use crate::estimators::ScalarKalmanFilter;
use crate::evaluation::{BeliefSink, BeliefSnapshot, BeliefTrace, ErrorStatistics, OnlineStatistic};
use crate::streams::MeasurementStream;
use crate::tasks::TaskError;
use chrono::{DateTime, Utc};
use std::sync::mpsc::Sender;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Totals produced by a finished [`TrackingRun`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub seconds: f64,
    pub timesteps: u64,
    pub measured: u64,
    pub missed: u64,
    pub final_belief: Belief,
    /// Observed value minus predicted mean, over fused readings.
    pub innovation: ErrorStatistics,
    /// Posterior mean minus hidden truth, over readings that carry truth.
    pub estimation_error: ErrorStatistics,
}

/// Drives one filter over one measurement stream: predict every timestep,
/// update when a reading arrived, and sample the belief for reporting.
pub struct TrackingRun {
    initial: Belief,
    filter: ScalarKalmanFilter,
    stream: Box<dyn MeasurementStream>,
    process: ProcessModel,

    trace: BeliefTrace,
    sinks: Vec<Box<dyn BeliefSink>>,

    max_timesteps: Option<u64>,
    sample_frequency: u64,

    processed: u64,
    measured: u64,
    missed: u64,
    last_reading: Option<u64>,
    last_measured: bool,
    last_sampled: Option<u64>,
    innovation: ErrorStatistics,
    estimation_error: ErrorStatistics,

    progress_tx: Option<Sender<BeliefSnapshot>>,
}

impl TrackingRun {
    pub fn new(
        filter: ScalarKalmanFilter,
        stream: Box<dyn MeasurementStream>,
        process: ProcessModel,
        max_timesteps: Option<u64>,
        sample_frequency: u64,
    ) -> Result<Self, TaskError> {
        if sample_frequency == 0 {
            return Err(TaskError::InvalidParameter(
                "sample_frequency must be > 0".into(),
            ));
        }

        Ok(Self {
            initial: filter.current_belief(),
            filter,
            stream,
            process,
            trace: BeliefTrace::default(),
            sinks: Vec::new(),
            max_timesteps,
            sample_frequency,
            processed: 0,
            measured: 0,
            missed: 0,
            last_reading: None,
            last_measured: false,
            last_sampled: None,
            innovation: ErrorStatistics::default(),
            estimation_error: ErrorStatistics::default(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<BeliefSnapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn BeliefSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Runs the stream to its end or to `max_timesteps`. Calling it again
    /// replays the run from the start.
    pub fn run(&mut self) -> Result<RunSummary, TaskError> {
        if self.processed > 0 || self.last_sampled.is_some() {
            self.restart()?;
        }
        let started_at = Utc::now();
        let clock = Instant::now();

        while self.stream.has_more_readings() {
            if let Some(n) = self.max_timesteps {
                if self.processed >= n {
                    break;
                }
            }
            let Some(reading) = self.stream.next_reading() else {
                break;
            };
            self.advance(&reading)?;

            if self.processed % self.sample_frequency == 0 {
                self.push_snapshot(reading.timestep, reading.measurement.is_some());
            }
        }

        let last = self.last_reading.unwrap_or(0);
        if self.last_sampled != Some(last) {
            self.push_snapshot(last, self.last_measured);
        }

        let summary = RunSummary {
            started_at,
            seconds: clock.elapsed().as_secs_f64(),
            timesteps: self.processed,
            measured: self.measured,
            missed: self.missed,
            final_belief: self.filter.current_belief(),
            innovation: self.innovation,
            estimation_error: self.estimation_error,
        };
        info!(
            timesteps = summary.timesteps,
            measured = summary.measured,
            missed = summary.missed,
            belief = %summary.final_belief,
            "tracking run finished"
        );
        Ok(summary)
    }

    pub fn trace(&self) -> &BeliefTrace {
        &self.trace
    }

    /// Rewinds the stream, restores the initial belief and clears all totals.
    pub fn restart(&mut self) -> Result<(), TaskError> {
        self.stream.restart()?;
        self.filter.reset(self.initial);
        self.trace = BeliefTrace::default();
        self.processed = 0;
        self.measured = 0;
        self.missed = 0;
        self.last_reading = None;
        self.last_measured = false;
        self.last_sampled = None;
        self.innovation = ErrorStatistics::default();
        self.estimation_error = ErrorStatistics::default();
        Ok(())
    }

    fn advance(&mut self, reading: &Reading) -> Result<(), TaskError> {
        let predicted_mean = self.filter.current_belief().mean() + self.process.drift();

        let belief = self
            .filter
            .step(&self.process, reading.measurement)
            .map_err(|e| {
                warn!(timestep = reading.timestep, error = %e, "estimator rejected reading");
                TaskError::from(e)
            })?;

        self.processed += 1;
        self.last_reading = Some(reading.timestep);
        self.last_measured = reading.measurement.is_some();
        match reading.measurement {
            Some(m) => {
                self.measured += 1;
                self.innovation.add(m.value() - predicted_mean);
            }
            None => self.missed += 1,
        }
        if let Some(truth) = reading.truth {
            self.estimation_error.add(belief.mean() - truth);
        }
        debug!(timestep = reading.timestep, belief = %belief, "step");
        Ok(())
    }

    fn push_snapshot(&mut self, timestep: u64, measured: bool) {
        let snapshot = BeliefSnapshot::of(timestep, &self.filter.current_belief(), measured);

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }
        for sink in self.sinks.iter_mut() {
            sink.record(snapshot);
        }

        self.trace.push(snapshot);
        self.last_sampled = Some(timestep);
    }
}
