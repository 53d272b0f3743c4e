// src/analysis/mod.rs
//! Parses Python sources and runs the detection checks.

pub mod checks;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tree_sitter::Parser;

use crate::config::Config;
use crate::error::{Result, WardenError};
use crate::types::{FileReport, ScanReport, Violation};

use checks::CheckContext;

/// Scans all files in parallel and aggregates the results. Files that fail
/// to read or parse are warned about and skipped; the scan itself never
/// fails.
#[must_use]
pub fn scan(files: &[PathBuf], config: &Config) -> ScanReport {
    let start = Instant::now();

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|path| match analyze_file(path, config) {
            Ok(report) => Some(report),
            Err(e) => {
                eprintln!("WARN: skipping {}: {e}", path.display());
                None
            }
        })
        .collect();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    let total_violations = reports.iter().map(FileReport::violation_count).sum();
    ScanReport {
        files: reports,
        total_violations,
        duration_ms: start.elapsed().as_millis(),
    }
}

/// Analyzes a single file on disk.
///
/// # Errors
/// Fails if the file cannot be read or the parser produces no tree.
pub fn analyze_file(path: &Path, config: &Config) -> Result<FileReport> {
    let source = fs::read_to_string(path).map_err(|source| WardenError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let violations = check_source(path, &source, config)?;
    Ok(FileReport {
        path: path.to_path_buf(),
        violations,
    })
}

/// Runs every check over one source buffer and returns the violations
/// ordered by location.
///
/// # Errors
/// Fails if the Python grammar cannot be loaded or parsing yields no tree.
pub fn check_source(path: &Path, source: &str, config: &Config) -> Result<Vec<Violation>> {
    let mut parser = Parser::new();
    parser.set_language(tree_sitter_python::language())?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| WardenError::Parse(path.to_path_buf()))?;

    let lines: Vec<&str> = source.lines().collect();
    let ctx = CheckContext {
        root: tree.root_node(),
        source,
        lines: &lines,
        config: &config.rules,
    };

    let mut out = Vec::new();
    checks::check_naming(&ctx, &mut out);
    checks::check_complexity(&ctx, &mut out);
    checks::check_conditions(&ctx, &mut out);
    checks::check_numbers(&ctx, &mut out);

    out.sort_by(|a, b| (a.line, a.column).cmp(&(b.line, b.column)));
    Ok(out)
}
