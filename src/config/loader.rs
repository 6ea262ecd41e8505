use crate::config::{ConfigError, TrackingConfig};
use schemars::schema_for;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

impl TrackingConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TrackingConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading tracking config");
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// JSON Schema of the whole configuration document.
    pub fn schema() -> Value {
        serde_json::to_value(schema_for!(TrackingConfig)).unwrap_or(Value::Null)
    }

    /// Checks that only need the document itself; numeric model limits are
    /// enforced when runtime objects are built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_frequency == 0 {
            return Err(ConfigError::InvalidParameter(
                "sample_frequency must be > 0".into(),
            ));
        }
        if self.tracks.is_empty() {
            return Err(ConfigError::InvalidParameter(
                "at least one track is required".into(),
            ));
        }
        let mut seen = HashSet::new();
        for track in &self.tracks {
            let name = track.name.as_str();
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(ConfigError::InvalidParameter(format!(
                    "track name '{name}' must be non-empty and free of path separators"
                )));
            }
            if !seen.insert(name) {
                return Err(ConfigError::InvalidParameter(format!(
                    "track name '{name}' is used twice"
                )));
            }
            if self.max_timesteps.is_none() && track.sensor.max_timesteps.is_none() {
                return Err(ConfigError::InvalidParameter(format!(
                    "track '{name}': either max_timesteps or sensor.max_timesteps must bound the run"
                )));
            }
        }
        if let Some(sweep) = &self.sweep {
            if sweep.dropout_probabilities.is_empty() {
                return Err(ConfigError::InvalidParameter(
                    "sweep.dropout_probabilities must not be empty".into(),
                ));
            }
            if let Some(name) = &sweep.track {
                if self.track(name).is_none() {
                    return Err(ConfigError::InvalidParameter(format!(
                        "sweep track '{name}' is not configured"
                    )));
                }
            }
        }
        Ok(())
    }
}
