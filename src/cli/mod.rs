//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::rewrite::ConversionDirection;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "authconv")]
#[command(about = "Toggle the AuthenticationMode field across JSON files in a directory tree")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Root directory to scan for JSON files
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Conversion direction
    #[arg(long, value_enum)]
    pub direction: Direction,

    /// Additional directory names to exclude from the scan (repeatable)
    #[arg(long = "exclude", value_name = "DIR")]
    pub excluded: Vec<String>,

    /// Print the run report as JSON
    #[arg(long)]
    pub stats: bool,

    /// Print a status line for every file examined
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Conversion direction for the CLI.
///
/// The long spellings are the flags the original commit hooks pass, kept
/// as aliases so existing hook scripts keep working.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Direction {
    #[value(name = "to-msi", alias = "ConnectionString2Msi")]
    ToMsi,
    #[value(name = "to-connection-string", alias = "Msi2ConnectionString")]
    ToConnectionString,
}

impl From<Direction> for ConversionDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::ToMsi => ConversionDirection::ToMsi,
            Direction::ToConnectionString => ConversionDirection::ToConnectionString,
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if a progress bar makes sense for this run
    pub fn should_show_progress(file_count: usize, quiet: bool) -> bool {
        !quiet && file_count > 20 && atty::is(atty::Stream::Stderr)
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }
}
