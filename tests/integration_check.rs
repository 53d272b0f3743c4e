// tests/integration_check.rs
//! End-to-end: analyze a file, record a baseline, re-analyze, reconcile.

use std::fs;

use tempfile::TempDir;

use stylewarden_core::analysis;
use stylewarden_core::baseline::{filter_out_saved, BaselineStore, SavedReports};
use stylewarden_core::config::Config;

const FIRST_RUN: &str = "\
data = 1
value = 2
";

// Same content, moved down by two lines of new code.
const SECOND_RUN: &str = "\
alpha = call()
beta = call()
data = 1
value = 2
";

#[test]
fn test_baseline_suppresses_identical_rerun() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.py");
    fs::write(&script, FIRST_RUN).unwrap();

    let config = Config::default();
    let report = analysis::analyze_file(&script, &config).unwrap();
    assert_eq!(report.violation_count(), 2);

    let filename = script.to_string_lossy().into_owned();
    let mut saved = SavedReports::new();
    saved.insert(filename.clone(), report.violations.clone());

    let baseline_path = temp.path().join("baseline.json");
    BaselineStore::from_report(saved).save_to(&baseline_path).unwrap();
    let mut baseline = BaselineStore::load_from(&baseline_path).unwrap().unwrap();

    let rerun = analysis::analyze_file(&script, &config).unwrap();
    let surviving = filter_out_saved(Some(&mut baseline), rerun.violations, &filename);
    assert!(surviving.is_empty());
}

#[test]
fn test_baseline_suppresses_moved_violations() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.py");

    fs::write(&script, FIRST_RUN).unwrap();
    let config = Config::default();
    let report = analysis::analyze_file(&script, &config).unwrap();

    let filename = script.to_string_lossy().into_owned();
    let mut saved = SavedReports::new();
    saved.insert(filename.clone(), report.violations.clone());
    let mut baseline = BaselineStore::from_report(saved);

    // The offending lines move down but keep their text: only the
    // physical-line pass can still match them.
    fs::write(&script, SECOND_RUN).unwrap();
    let rerun = analysis::analyze_file(&script, &config).unwrap();
    assert_eq!(rerun.violation_count(), 2);
    assert!(rerun.violations.iter().all(|v| v.line >= 3));

    let surviving = filter_out_saved(Some(&mut baseline), rerun.violations, &filename);
    assert!(surviving.is_empty());
}

#[test]
fn test_new_violations_survive_reconciliation() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.py");

    fs::write(&script, FIRST_RUN).unwrap();
    let config = Config::default();
    let report = analysis::analyze_file(&script, &config).unwrap();

    let filename = script.to_string_lossy().into_owned();
    let mut saved = SavedReports::new();
    saved.insert(filename.clone(), report.violations.clone());
    let mut baseline = BaselineStore::from_report(saved);

    // A brand-new violation appears alongside the accepted ones.
    let with_new = format!("{FIRST_RUN}info = 3\n");
    fs::write(&script, &with_new).unwrap();
    let rerun = analysis::analyze_file(&script, &config).unwrap();
    assert_eq!(rerun.violation_count(), 3);

    let surviving = filter_out_saved(Some(&mut baseline), rerun.violations, &filename);
    assert_eq!(surviving.len(), 1);
    assert_eq!(surviving[0].message, "Found wrong variable name 'info'");
}

#[test]
fn test_absent_baseline_reports_everything() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.py");
    fs::write(&script, FIRST_RUN).unwrap();

    let config = Config::default();
    let report = analysis::analyze_file(&script, &config).unwrap();
    let reported = report.violations.clone();

    let surviving = filter_out_saved(None, report.violations, "script.py");
    assert_eq!(surviving, reported);
}

#[test]
fn test_scan_aggregates_multiple_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("clean.py"), "alpha = call()\n").unwrap();
    fs::write(temp.path().join("dirty.py"), "data = 1\n").unwrap();

    let config = Config::default();
    let files = stylewarden_core::discovery::discover(&[temp.path().to_path_buf()], false);
    let report = analysis::scan(&files, &config);

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.total_violations, 1);
    assert_eq!(report.clean_file_count(), 1);
    assert!(report.has_errors());
}
