//! Aggregate outcome counters for one rewrite run

use crate::rewrite::engine::FileOutcome;
use serde::{Deserialize, Serialize};

/// What happened across one invocation over a file tree.
///
/// Built incrementally while files are processed; `write_failures` is the
/// only counter that should make a caller treat the run as failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Files whose content was inspected (including unmodified ones)
    pub examined: usize,
    /// Files rewritten with a new field value
    pub modified: usize,
    /// Files skipped as unreadable, undecodable, or malformed JSON
    pub skipped: usize,
    /// Files that changed in memory but could not be written back
    pub write_failures: usize,
    /// When the run finished
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

impl Default for RunReport {
    fn default() -> Self {
        Self {
            examined: 0,
            modified: 0,
            skipped: 0,
            write_failures: 0,
            completed_at: chrono::Utc::now(),
        }
    }
}

impl RunReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one file's outcome into the counters
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.examined += 1;
        match outcome {
            FileOutcome::Modified => self.modified += 1,
            FileOutcome::Unchanged => {}
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::WriteFailed(_) => self.write_failures += 1,
        }
    }

    /// Mark the run as finished
    pub fn finish(&mut self) {
        self.completed_at = chrono::Utc::now();
    }

    /// Whether the caller can treat the run as successful
    pub fn is_clean(&self) -> bool {
        self.write_failures == 0
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        let mut line = format!(
            "examined {} file(s): {} modified, {} skipped",
            self.examined, self.modified, self.skipped
        );
        if self.write_failures > 0 {
            line.push_str(&format!(", {} write failure(s)", self.write_failures));
        }
        line
    }
}
