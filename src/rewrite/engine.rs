//! Core rewrite engine
//!
//! One file at a time: read raw bytes, detect style, parse, update every
//! matching field, and write back only when something actually changed.

use crate::error::{RewriteError, RewriteResult};
use crate::format::serialize_with_style;
use crate::rewrite::config::{ConversionDirection, RewriteConfig};
use crate::rewrite::report::RunReport;
use crate::scan;
use crate::style::detect_style;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Why a file was left alone without being counted as unchanged
#[derive(Debug)]
pub enum SkipReason {
    /// File could not be read at all
    Unreadable(String),
    /// Bytes were not valid UTF-8
    Decode(String),
    /// Content was not valid JSON (covers empty files)
    Parse(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unreadable(msg) => write!(f, "unreadable: {}", msg),
            SkipReason::Decode(msg) => write!(f, "encoding error: {}", msg),
            SkipReason::Parse(msg) => write!(f, "invalid JSON: {}", msg),
        }
    }
}

/// Result of processing a single file
#[derive(Debug)]
pub enum FileOutcome {
    /// Field updated and file rewritten
    Modified,
    /// No matching field needed a change; file untouched on disk
    Unchanged,
    /// File left untouched and counted as skipped
    Skipped(SkipReason),
    /// Document changed in memory but the write-back failed
    WriteFailed(io::Error),
}

/// The orchestration and mutation core.
///
/// Invoked with a root directory and a [`ConversionDirection`], returns a
/// [`RunReport`]. Per-file problems are absorbed into the report; only a
/// bad root or a failed walk aborts the run.
pub struct FieldRewriter {
    config: RewriteConfig,
}

impl FieldRewriter {
    /// Create a rewriter with the given configuration
    pub fn new(config: RewriteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    /// Process every JSON file under `root`, rewriting toward the
    /// direction's target literal.
    pub fn run(&self, root: &Path, direction: ConversionDirection) -> RewriteResult<RunReport> {
        let mut report = RunReport::new();
        for path in self.discover(root)? {
            report.record(&self.process_file(&path, direction));
        }
        report.finish();
        Ok(report)
    }

    /// Enumerate candidate files, validating the root first
    pub fn discover(&self, root: &Path) -> RewriteResult<Vec<std::path::PathBuf>> {
        if !root.is_dir() {
            return Err(RewriteError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }
        Ok(scan::find_json_files(root, &self.config.excluded_dirs)?)
    }

    /// Read, mutate, and (when dirty) rewrite one file.
    ///
    /// Unchanged documents never hit the disk again, so their metadata is
    /// left undisturbed for the surrounding version-control tooling.
    pub fn process_file(&self, path: &Path, direction: ConversionDirection) -> FileOutcome {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return FileOutcome::Skipped(SkipReason::Unreadable(e.to_string())),
        };

        let (has_bom, body) = strip_bom(&bytes);
        let content = match std::str::from_utf8(body) {
            Ok(content) => content,
            Err(e) => return FileOutcome::Skipped(SkipReason::Decode(e.to_string())),
        };

        let mut style = detect_style(content, &self.config.style_defaults);
        style.bom = has_bom;

        let mut document: Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(e) => return FileOutcome::Skipped(SkipReason::Parse(e.to_string())),
        };

        if !update_field(&mut document, &self.config.field_name, direction.target()) {
            return FileOutcome::Unchanged;
        }

        let serialized = match serialize_with_style(&document, &style) {
            Ok(serialized) => serialized,
            Err(e) => {
                return FileOutcome::WriteFailed(io::Error::new(
                    io::ErrorKind::InvalidData,
                    e.user_message(),
                ))
            }
        };

        let mut output = Vec::with_capacity(serialized.len() + UTF8_BOM.len());
        if style.bom {
            output.extend_from_slice(UTF8_BOM);
        }
        output.extend_from_slice(serialized.as_bytes());

        match fs::write(path, output) {
            Ok(()) => FileOutcome::Modified,
            Err(e) => FileOutcome::WriteFailed(e),
        }
    }
}

fn strip_bom(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => (true, rest),
        None => (false, bytes),
    }
}

/// Recursively set every string-valued `field` entry that differs from
/// `target`, at any nesting depth. Returns whether anything changed.
///
/// Each match is evaluated independently, so a document mixing both
/// literals converges to the target in one pass.
pub fn update_field(value: &mut Value, field: &str, target: &str) -> bool {
    let mut modified = false;

    match value {
        Value::Object(map) => {
            if let Some(Value::String(current)) = map.get_mut(field) {
                if current != target {
                    *current = target.to_string();
                    modified = true;
                }
            }
            for entry in map.values_mut() {
                if update_field(entry, field, target) {
                    modified = true;
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                if update_field(item, field, target) {
                    modified = true;
                }
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }

    modified
}
