// src/types.rs
//! Common data structures: violation records, keys, and scan reports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single reported style/complexity issue, fully self-describing.
///
/// A violation is immutable once created and has no identity beyond these
/// five fields. On disk it is serialized as a fixed-order 5-tuple
/// `(code, line, column, message, physical_line)`; the field-name to
/// position mapping happens only at this serde boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ViolationTuple", into = "ViolationTuple")]
pub struct Violation {
    /// Short rule identifier, e.g. `SW110`.
    pub code: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column offset.
    pub column: usize,
    /// Human-readable violation text. Identical text implies identical
    /// rule and context.
    pub message: String,
    /// Verbatim source text of the offending line at analysis time.
    pub physical_line: String,
}

/// Wire shape of a violation in the baseline file.
type ViolationTuple = (String, usize, usize, String, String);

impl From<ViolationTuple> for Violation {
    fn from((code, line, column, message, physical_line): ViolationTuple) -> Self {
        Self {
            code,
            line,
            column,
            message,
            physical_line,
        }
    }
}

impl From<Violation> for ViolationTuple {
    fn from(v: Violation) -> Self {
        (v.code, v.line, v.column, v.message, v.physical_line)
    }
}

/// How violations are identified during reconciliation: `(code, message)`.
pub type ViolationKey = (String, String);

impl Violation {
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        line: usize,
        column: usize,
        message: impl Into<String>,
        physical_line: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            line,
            column,
            message: message.into(),
            physical_line: physical_line.into(),
        }
    }

    /// Returns the coarse grouping key for reconciliation.
    #[must_use]
    pub fn key(&self) -> ViolationKey {
        (self.code.clone(), self.message.clone())
    }
}

/// Partitions violations into groups sharing a [`ViolationKey`], preserving
/// each group's original relative order. Used identically on the freshly
/// reported side and on the baseline side.
#[must_use]
pub fn group_by_key(violations: Vec<Violation>) -> Vec<(ViolationKey, Vec<Violation>)> {
    let mut groups: Vec<(ViolationKey, Vec<Violation>)> = Vec::new();
    for violation in violations {
        let key = violation.key();
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, group)) => group.push(violation),
            None => groups.push((key, vec![violation])),
        }
    }
    groups
}

/// Analysis results for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}

impl FileReport {
    /// Returns true if no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

/// Aggregated results from scanning multiple files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_violations: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    /// Returns true if any violations were found.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.total_violations > 0
    }

    /// Returns the number of clean files.
    #[must_use]
    pub fn clean_file_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_clean()).count()
    }

    /// Recomputes the violation total after per-file filtering.
    pub fn recount(&mut self) {
        self.total_violations = self.files.iter().map(FileReport::violation_count).sum();
    }
}
