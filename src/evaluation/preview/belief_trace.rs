use crate::evaluation::{BeliefSink, BeliefSnapshot};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TraceFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl TraceFormat {
    pub fn extension(self) -> &'static str {
        match self {
            TraceFormat::Csv => "csv",
            TraceFormat::Tsv => "tsv",
            TraceFormat::Json => "json",
        }
    }
}

/// In-memory sequence of belief snapshots for one track.
#[derive(Debug, Default, Clone)]
pub struct BeliefTrace {
    entries: Vec<BeliefSnapshot>,
}

impl BeliefTrace {
    pub fn push(&mut self, snapshot: BeliefSnapshot) {
        self.entries.push(snapshot)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<BeliefSnapshot> {
        self.entries.last().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = &BeliefSnapshot> {
        self.entries.iter()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: TraceFormat) -> Result<(), Error> {
        match fmt {
            TraceFormat::Csv => self.export_with_delimiter(path, ','),
            TraceFormat::Tsv => self.export_with_delimiter(path, '\t'),
            TraceFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "timestep{d}mean{d}std_dev{d}measured", d = delimiter)?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}{d}{}",
                s.timestep,
                s.mean,
                s.std_dev,
                s.measured,
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.entries)?;
        writeln!(w)?;
        w.flush()
    }
}

impl BeliefSink for BeliefTrace {
    fn record(&mut self, snapshot: BeliefSnapshot) {
        self.push(snapshot)
    }
}
