// src/reporting.rs
//! Console output for scan results.

use colored::Colorize;

use crate::types::ScanReport;

/// Prints violations flake8-style (`path:line:col: CODE message`) followed
/// by a summary line.
pub fn print_report(report: &ScanReport) {
    for file in &report.files {
        for v in &file.violations {
            println!(
                "{}:{}:{}: {} {}",
                file.path.display(),
                v.line,
                v.column,
                v.code.red().bold(),
                v.message
            );
        }
    }
    print_summary(report);
}

fn print_summary(report: &ScanReport) {
    let scanned = report.files.len();
    if report.has_errors() {
        println!(
            "\n{} {} violation(s) in {} file(s) ({} clean, {}ms)",
            "FAIL:".red().bold(),
            report.total_violations,
            scanned,
            report.clean_file_count(),
            report.duration_ms
        );
    } else {
        println!(
            "\n{} {} file(s) scanned, no violations ({}ms)",
            "OK:".green().bold(),
            scanned,
            report.duration_ms
        );
    }
}

/// Prints the result of writing a new baseline.
pub fn print_baseline_written(violations: usize, files: usize) {
    println!(
        "{} baseline written with {violations} violation(s) across {files} file(s)",
        "OK:".green().bold()
    );
}
