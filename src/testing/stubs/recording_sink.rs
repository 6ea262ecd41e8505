use crate::evaluation::{BeliefSink, BeliefSnapshot};
use std::sync::{Arc, Mutex};

/// Sink that shares what it records with a handle kept by the test.
pub struct RecordingSink {
    seen: Arc<Mutex<Vec<BeliefSnapshot>>>,
}

#[derive(Clone)]
pub struct RecordingHandle {
    seen: Arc<Mutex<Vec<BeliefSnapshot>>>,
}

impl RecordingSink {
    pub fn new() -> (Self, RecordingHandle) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                seen: Arc::clone(&seen),
            },
            RecordingHandle { seen },
        )
    }
}

impl RecordingHandle {
    pub fn snapshots(&self) -> Vec<BeliefSnapshot> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl BeliefSink for RecordingSink {
    fn record(&mut self, snapshot: BeliefSnapshot) {
        if let Ok(mut v) = self.seen.lock() {
            v.push(snapshot);
        }
    }
}
