// src/cli.rs
//! Command-line surface and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::baseline::{self, SavedReports};
use crate::config::Config;
use crate::{analysis, discovery, reporting};

#[derive(Parser)]
#[command(name = "stylewarden", version, about = "Python style checker with baseline support")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze files and report violations
    Check {
        #[arg(value_name = "PATH", default_value = ".")]
        paths: Vec<PathBuf>,
        /// Suppress violations recorded in the baseline file
        #[arg(long)]
        baseline: bool,
    },
    /// Run a full analysis and record the result as the new baseline
    Baseline {
        #[arg(value_name = "PATH", default_value = ".")]
        paths: Vec<PathBuf>,
    },
}

/// Runs the parsed command and returns the process exit code.
///
/// # Errors
/// Returns an error for unreadable or corrupt baseline files and other
/// hard failures; per-file analysis problems are warnings, not errors.
pub fn dispatch(cli: &Cli) -> Result<i32> {
    let mut config = Config::load();
    config.verbose = cli.verbose;

    match &cli.command {
        Commands::Check { paths, baseline } => run_check(paths, *baseline, &config),
        Commands::Baseline { paths } => run_baseline(paths, &config),
    }
}

fn run_check(paths: &[PathBuf], use_baseline: bool, config: &Config) -> Result<i32> {
    let files = discovery::discover(paths, config.verbose);
    let mut report = analysis::scan(&files, config);

    if use_baseline {
        // Load once before any filtering; a corrupt baseline aborts here.
        let mut baseline = baseline::load_baseline().context("failed to load baseline")?;
        for file in &mut report.files {
            let filename = file.path.to_string_lossy().into_owned();
            let reported = std::mem::take(&mut file.violations);
            file.violations = baseline::filter_out_saved(baseline.as_mut(), reported, &filename);
        }
        report.recount();
    }

    reporting::print_report(&report);
    Ok(i32::from(report.has_errors()))
}

fn run_baseline(paths: &[PathBuf], config: &Config) -> Result<i32> {
    let files = discovery::discover(paths, config.verbose);
    let report = analysis::scan(&files, config);

    let mut saved = SavedReports::new();
    for file in report.files.iter().filter(|f| !f.is_clean()) {
        saved.insert(
            file.path.to_string_lossy().into_owned(),
            file.violations.clone(),
        );
    }

    let baseline = baseline::write_new_baseline(saved).context("failed to write baseline")?;
    reporting::print_baseline_written(
        baseline.error_count(),
        baseline.paths.len(),
    );
    Ok(0)
}
