use crate::evaluation::TraceFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_SEED: u64 = 42;
const DEFAULT_TIMESTEPS: u64 = 100;
const DEFAULT_SWEEP_TIMESTEPS: u64 = 500;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_max_timesteps() -> Option<u64> {
    Some(DEFAULT_TIMESTEPS)
}

fn default_sample_frequency() -> u64 {
    1
}

fn default_sweep() -> Option<SweepParameters> {
    Some(SweepParameters::default())
}

fn default_tracks() -> Vec<TrackParameters> {
    vec![TrackParameters::position(), TrackParameters::velocity()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BeliefParameters {
    #[schemars(title = "Mean", description = "Initial mean of the belief")]
    pub mean: f64,

    #[schemars(
        title = "Variance",
        description = "Initial variance of the belief (> 0)",
        range(min = 0.0)
    )]
    pub variance: f64,
}

impl Default for BeliefParameters {
    fn default() -> Self {
        Self {
            mean: 1.0,
            variance: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ProcessParameters {
    #[schemars(title = "Drift", description = "Mean shift applied every timestep")]
    pub drift: f64,

    #[schemars(
        title = "Variance",
        description = "Uncertainty added every timestep (>= 0)",
        range(min = 0.0)
    )]
    pub variance: f64,
}

impl Default for ProcessParameters {
    fn default() -> Self {
        Self {
            drift: 1.0,
            variance: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SensorParameters {
    #[schemars(title = "Start", description = "Hidden value at timestep 0")]
    pub start: f64,

    #[schemars(
        title = "Truth Drift",
        description = "Change of the hidden value per timestep"
    )]
    pub truth_drift: f64,

    #[schemars(
        title = "Noise",
        description = "Standard deviation of the sensor noise (> 0)",
        range(min = 0.0)
    )]
    pub noise_std_dev: f64,

    #[schemars(
        title = "Dropout",
        description = "Probability that a reading is missed (0.0–1.0)",
        range(min = 0.0, max = 1.0)
    )]
    pub dropout_probability: f64,

    #[schemars(
        title = "Max Timesteps",
        description = "Upper bound on readings; empty = infinite"
    )]
    pub max_timesteps: Option<u64>,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed")]
    pub seed: u64,
}

impl Default for SensorParameters {
    fn default() -> Self {
        Self {
            start: 1.0,
            truth_drift: 1.0,
            noise_std_dev: 12.0,
            dropout_probability: 0.1,
            max_timesteps: None,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputParameters {
    #[schemars(
        with = "String",
        title = "Trace Directory",
        description = "Directory receiving one belief trace per track",
        extend("format" = "path")
    )]
    pub directory: PathBuf,

    #[serde(default)]
    #[schemars(title = "Format", description = "csv, tsv or json")]
    pub format: TraceFormat,
}

impl OutputParameters {
    /// `<directory>/<track>.<ext>`
    pub fn path_for(&self, track: &str) -> PathBuf {
        self.directory
            .join(format!("{track}.{}", self.format.extension()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SweepParameters {
    #[schemars(
        title = "Dropout Probabilities",
        description = "One tracking run per probability"
    )]
    pub dropout_probabilities: Vec<f64>,

    #[schemars(
        title = "Timesteps",
        description = "Readings per sweep run",
        range(min = 1)
    )]
    pub timesteps: u64,

    #[schemars(
        title = "Track",
        description = "Name of the track to sweep; the first track when empty"
    )]
    pub track: Option<String>,
}

impl Default for SweepParameters {
    fn default() -> Self {
        Self {
            dropout_probabilities: crate::tasks::DEFAULT_DROPOUT_PROBABILITIES.to_vec(),
            timesteps: DEFAULT_SWEEP_TIMESTEPS,
            track: None,
        }
    }
}

/// One tracked quantity with its own filter, process model and sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrackParameters {
    #[schemars(
        title = "Name",
        description = "Unique track name, also used as the trace file stem"
    )]
    pub name: String,

    #[serde(default)]
    #[schemars(title = "Initial Belief")]
    pub initial: BeliefParameters,

    #[serde(default)]
    #[schemars(title = "Process Model")]
    pub process: ProcessParameters,

    #[serde(default)]
    #[schemars(title = "Sensor")]
    pub sensor: SensorParameters,
}

impl TrackParameters {
    /// Position drifting one unit per timestep, read by a coarse sensor.
    pub fn position() -> Self {
        Self {
            name: "position".into(),
            initial: BeliefParameters::default(),
            process: ProcessParameters::default(),
            sensor: SensorParameters::default(),
        }
    }

    /// Constant unit velocity, read by a finer sensor with its own seed.
    pub fn velocity() -> Self {
        Self {
            name: "velocity".into(),
            initial: BeliefParameters {
                mean: 1.0,
                variance: 1.7,
            },
            process: ProcessParameters {
                drift: 0.0,
                variance: 0.05,
            },
            sensor: SensorParameters {
                start: 1.0,
                truth_drift: 0.0,
                noise_std_dev: 1.3,
                seed: DEFAULT_SEED + 1,
                ..SensorParameters::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrackingConfig {
    #[serde(default = "default_tracks")]
    #[schemars(
        title = "Tracks",
        description = "Independently filtered quantities, run side by side"
    )]
    pub tracks: Vec<TrackParameters>,

    #[serde(default = "default_max_timesteps")]
    #[schemars(
        title = "Max Timesteps",
        description = "Stop after this many timesteps (None = until the stream ends)"
    )]
    pub max_timesteps: Option<u64>,

    #[serde(default = "default_sample_frequency")]
    #[schemars(
        title = "Sample Frequency",
        description = "Record the belief every N timesteps",
        range(min = 1)
    )]
    pub sample_frequency: u64,

    #[serde(default)]
    #[schemars(title = "Output")]
    pub output: Option<OutputParameters>,

    #[serde(default = "default_sweep")]
    #[schemars(title = "Dropout Sweep", description = "null disables the sweep")]
    pub sweep: Option<SweepParameters>,
}

impl TrackingConfig {
    pub fn track(&self, name: &str) -> Option<&TrackParameters> {
        self.tracks.iter().find(|t| t.name == name)
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            tracks: default_tracks(),
            max_timesteps: default_max_timesteps(),
            sample_frequency: default_sample_frequency(),
            output: None,
            sweep: default_sweep(),
        }
    }
}
