//! Attempt log
//!
//! Every failed model attempt is recorded before the chain advances, so
//! individual backend failures stay visible even though callers only ever
//! see the terminal exhaustion error. Writes are best effort; a sink that
//! cannot persist must not take the request down with it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// One failed model attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub timestamp: DateTime<Utc>,
    /// Groups the attempts of a single gateway call.
    pub request_id: Uuid,
    pub model: String,
    /// Zero-based position in the fallback chain.
    pub attempt: usize,
    pub reason: String,
}

/// Where failed attempts go. Injected so tests can observe the log
/// without touching the filesystem.
pub trait AttemptSink: Send + Sync {
    fn record(&self, failure: &FailureRecord);
}

/// Appends one JSON line per failure to a shared log file.
#[derive(Debug)]
pub struct FileAttemptSink {
    path: PathBuf,
}

impl FileAttemptSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AttemptSink for FileAttemptSink {
    fn record(&self, failure: &FailureRecord) {
        let mut line = match serde_json::to_string(failure) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to serialize attempt record");
                return;
            }
        };
        line.push('\n');
        // The newline rides in the same write as the record; splitting
        // them would let concurrent appends interleave mid-line.
        let written = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = written {
            warn!(path = %self.path.display(), error = %e, "failed to append attempt record");
        }
    }
}

/// In-memory sink for tests and local runs.
#[derive(Debug, Default)]
pub struct MemoryAttemptSink {
    records: Mutex<Vec<FailureRecord>>,
}

impl MemoryAttemptSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<FailureRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl AttemptSink for MemoryAttemptSink {
    fn record(&self, failure: &FailureRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(failure.clone());
        }
    }
}
