// src/baseline/mod.rs
//! Baseline persistence and reconciliation of reported violations.
//!
//! A baseline is a snapshot of previously accepted violations. On later
//! runs, freshly reported violations are matched against it so that only
//! new issues are reported. Matching is fuzzy by necessity: there is no
//! stable identity for a violation across runs, so the engine works through
//! four passes of decreasing strictness (see [`BaselineStore::filter_group`]).

mod store;

pub use store::{BaselineMetadata, BaselineStore, SavedReports, BASELINE_FILE_VERSION};

use std::path::PathBuf;

use crate::error::Result;
use crate::types::{group_by_key, Violation};

/// Constant filename where the baseline snapshot is stored.
pub const BASELINE_FILE: &str = ".stylewarden-baseline.json";

/// Baselines only live in the current (main) directory.
#[must_use]
pub fn baseline_fullpath() -> PathBuf {
    PathBuf::from(BASELINE_FILE)
}

/// Loads the baseline snapshot from the working directory.
///
/// Returns `None` when no baseline file exists yet (first run).
///
/// # Errors
/// Fails hard when the file exists but is unreadable, corrupt, or has an
/// incompatible version.
pub fn load_baseline() -> Result<Option<BaselineStore>> {
    BaselineStore::load_from(&baseline_fullpath())
}

/// Creates a fresh baseline from a full report and writes it to the working
/// directory, replacing any previous baseline wholesale.
///
/// # Errors
/// Fails if the file cannot be written.
pub fn write_new_baseline(saved_reports: SavedReports) -> Result<BaselineStore> {
    let baseline = BaselineStore::from_report(saved_reports);
    baseline.save_to(&baseline_fullpath())?;
    Ok(baseline)
}

/// Drops reported violations that are already saved in the baseline.
///
/// With no baseline present, every reported violation is returned unchanged
/// in its original order.
#[must_use]
pub fn filter_out_saved(
    baseline: Option<&mut BaselineStore>,
    reported: Vec<Violation>,
    filename: &str,
) -> Vec<Violation> {
    let Some(baseline) = baseline else {
        // Baseline does not exist yet: report everything.
        return reported;
    };

    let mut surviving = Vec::new();
    for (violation_key, violations) in group_by_key(reported) {
        surviving.extend(baseline.filter_group(filename, &violation_key, violations));
    }
    surviving
}
