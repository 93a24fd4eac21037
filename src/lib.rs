//! AuthenticationMode converter
//!
//! A Rust CLI tool and library that toggles the `AuthenticationMode` field
//! between `ConnectionString` and `Msi` across every JSON file under a
//! directory tree, preserving each file's original formatting (indentation
//! unit, line endings, trailing newline, UTF-8 BOM) on rewrite. Meant to
//! run around a version-control commit boundary so a machine-local
//! credential mode never lands in shared history.

pub mod cli;
pub mod error;
pub mod format;
pub mod rewrite;
pub mod scan;
pub mod style;

// Re-export commonly used types
pub use error::{RewriteError, RewriteResult};
pub use rewrite::{ConversionDirection, FieldRewriter, FileOutcome, RewriteConfig, RunReport};
pub use style::{IndentUnit, LineEnding, StyleDefaults, StyleDescriptor};

use std::path::Path;

/// Rewrite every `AuthenticationMode` field under `root` with the default
/// configuration.
pub fn convert_tree(root: &Path, direction: ConversionDirection) -> RewriteResult<RunReport> {
    convert_tree_with_config(root, direction, RewriteConfig::default())
}

/// Rewrite every matching field under `root` with a custom configuration.
pub fn convert_tree_with_config(
    root: &Path,
    direction: ConversionDirection,
    config: RewriteConfig,
) -> RewriteResult<RunReport> {
    FieldRewriter::new(config).run(root, direction)
}
