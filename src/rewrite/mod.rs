//! Tree-wide rewriting of the AuthenticationMode field
//!
//! This module contains the conversion direction, the rewriter
//! configuration, the engine itself, and the run report returned to the
//! caller.

pub mod config;
pub mod engine;
pub mod report;

pub use config::{ConversionDirection, RewriteConfig};
pub use engine::{update_field, FieldRewriter, FileOutcome, SkipReason};
pub use report::RunReport;
