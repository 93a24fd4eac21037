// Allow dead code for library items not exercised by the CLI itself
#![allow(dead_code)]

use anyhow::{bail, Result};
use clap::Parser;

mod cli;
mod error;
mod format;
mod rewrite;
mod scan;
mod style;

use crate::cli::{Args, CliUtils};
use crate::rewrite::{ConversionDirection, FieldRewriter, FileOutcome, RewriteConfig, RunReport};

fn main() -> Result<()> {
    let args = Args::parse();
    let report = run(&args)?;

    if !report.is_clean() {
        bail!(
            "{} file(s) changed in memory but could not be written back",
            report.write_failures
        );
    }

    Ok(())
}

fn run(args: &Args) -> Result<RunReport> {
    let direction: ConversionDirection = args.direction.into();
    let config = RewriteConfig::new().with_excluded_dirs(args.excluded.iter().cloned());
    let rewriter = FieldRewriter::new(config);

    let files = rewriter
        .discover(&args.root)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if !args.quiet {
        println!(
            "Converting {} (target: \"{}\")",
            args.root.display(),
            direction.target()
        );
    }

    let progress = CliUtils::should_show_progress(files.len(), args.quiet)
        .then(|| CliUtils::create_progress_bar(files.len() as u64));

    let mut report = RunReport::new();
    for path in &files {
        let outcome = rewriter.process_file(path, direction);

        match &outcome {
            FileOutcome::Modified => {
                if args.verbose {
                    CliUtils::show_success(&format!("modified {}", path.display()), args.quiet);
                }
            }
            FileOutcome::Unchanged => {
                if args.verbose && !args.quiet {
                    println!("  unchanged {}", path.display());
                }
            }
            FileOutcome::Skipped(reason) => {
                CliUtils::show_warning(
                    &format!("skipping {}: {}", path.display(), reason),
                    args.quiet,
                );
            }
            FileOutcome::WriteFailed(e) => {
                CliUtils::show_error(&format!("failed to write {}: {}", path.display(), e));
            }
        }

        report.record(&outcome);
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    report.finish();

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    if !args.quiet {
        println!("{}", report.summary());
    }

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report)
}
