// src/baseline/store.rs
//! Baseline snapshot storage and the staged match-and-consume engine.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WardenError};
use crate::types::{Violation, ViolationKey};

/// Mapping of file path to the violations recorded for it by a full run.
pub type SavedReports = BTreeMap<String, Vec<Violation>>;

/// Baseline files are versioned independently of the crate, because we can
/// break the format.
pub const BASELINE_FILE_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineMetadata {
    /// ISO-8601 timestamp of when the baseline was created.
    pub created_at: String,
    /// ISO-8601 timestamp of the last update.
    pub updated_at: String,
    /// Format version of the file, see [`BASELINE_FILE_VERSION`].
    pub baseline_file_version: String,
}

/// One persisted snapshot of accepted violations.
///
/// `paths` is the durable view and is never mutated after construction.
/// The secondary index is derived from it on every load or construction and
/// only exists so candidates can be consumed during one reconciliation pass;
/// it is never serialized.
#[derive(Debug, Serialize, Deserialize)]
pub struct BaselineStore {
    pub metadata: BaselineMetadata,
    pub paths: SavedReports,

    /// file path -> violation key -> remaining candidate pool.
    #[serde(skip)]
    index: HashMap<String, HashMap<ViolationKey, Vec<Violation>>>,
}

/// One stage of the match-and-consume algorithm. Later passes require fewer
/// fields to agree. Code and message already agree via the violation key.
#[derive(Debug, Clone, Copy)]
enum MatchPass {
    /// `line`, `column` and `physical_line` all equal.
    Exact,
    /// `line` and `physical_line` equal; survives column shifts from
    /// reformatting.
    LineAndText,
    /// `line` and `column` equal; survives trivial edits to the line text.
    LineAndColumn,
    /// `physical_line` equal; survives the line moving up or down unchanged.
    TextOnly,
}

const MATCH_PASSES: [MatchPass; 4] = [
    MatchPass::Exact,
    MatchPass::LineAndText,
    MatchPass::LineAndColumn,
    MatchPass::TextOnly,
];

impl MatchPass {
    fn matches(self, candidate: &Violation, reported: &Violation) -> bool {
        match self {
            Self::Exact => {
                candidate.line == reported.line
                    && candidate.column == reported.column
                    && candidate.physical_line == reported.physical_line
            }
            Self::LineAndText => {
                candidate.line == reported.line
                    && candidate.physical_line == reported.physical_line
            }
            Self::LineAndColumn => {
                candidate.line == reported.line && candidate.column == reported.column
            }
            Self::TextOnly => candidate.physical_line == reported.physical_line,
        }
    }
}

impl BaselineStore {
    /// Constructs a baseline from the reports of a full, unfiltered run.
    /// Both timestamps get the current time.
    #[must_use]
    pub fn from_report(saved_reports: SavedReports) -> Self {
        let now = Utc::now().to_rfc3339();
        let mut store = Self {
            metadata: BaselineMetadata {
                created_at: now.clone(),
                updated_at: now,
                baseline_file_version: BASELINE_FILE_VERSION.to_string(),
            },
            paths: saved_reports,
            index: HashMap::new(),
        };
        store.rebuild_index();
        store
    }

    /// Returns the total violation count stored in the baseline.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.paths.values().map(Vec::len).sum()
    }

    /// Tells which of the reported violations are already saved in the
    /// baseline, and returns only the ones that are not.
    ///
    /// Several attempts are made to guess which violation is which, because
    /// a violation can move up or down in the source while staying exactly
    /// the same, or the line can be slightly edited while staying in place.
    /// There is probably no deterministic algorithm for this, so in rare
    /// cases an old violation will be accepted in place of a new one. That
    /// is fine.
    pub fn filter_group(
        &mut self,
        filename: &str,
        violation_key: &ViolationKey,
        violations: Vec<Violation>,
    ) -> Vec<Violation> {
        let pool = match self
            .index
            .get_mut(filename)
            .and_then(|keys| keys.get_mut(violation_key))
        {
            Some(pool) if !pool.is_empty() => pool,
            // Nothing stored for this file and key: report everything.
            _ => return violations,
        };

        // Matched entries are tagged in auxiliary marks and filtered at the
        // end, so neither sequence is mutated while it is being iterated.
        let mut consumed = vec![false; pool.len()];
        let mut accounted = vec![false; violations.len()];

        // All four passes always run, even when an early pass already
        // accounted for every reported violation: later passes may still
        // consume leftover candidates.
        for pass in MATCH_PASSES {
            for (slot, reported) in violations.iter().enumerate() {
                if accounted[slot] {
                    continue;
                }
                // First-fit: take the first unconsumed candidate that
                // satisfies this pass, in original order.
                let hit = pool.iter().enumerate().find_map(|(idx, candidate)| {
                    (!consumed[idx] && pass.matches(candidate, reported)).then_some(idx)
                });
                if let Some(idx) = hit {
                    consumed[idx] = true;
                    accounted[slot] = true;
                }
            }
        }

        let mut consumed_flags = consumed.into_iter();
        pool.retain(|_| !consumed_flags.next().unwrap_or(false));

        violations
            .into_iter()
            .zip(accounted)
            .filter_map(|(violation, matched)| (!matched).then_some(violation))
            .collect()
    }

    /// Loads a baseline from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist, which means the
    /// baseline is being created for the very first time. Everything else
    /// that goes wrong is a hard error: a corrupt baseline must not silently
    /// degrade into "no baseline".
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(WardenError::Io {
                    source,
                    path: path.to_path_buf(),
                })
            }
        };

        let mut store: Self =
            serde_json::from_str(&raw).map_err(|source| WardenError::CorruptBaseline {
                source,
                path: path.to_path_buf(),
            })?;

        if store.metadata.baseline_file_version != BASELINE_FILE_VERSION {
            return Err(WardenError::BaselineVersion {
                found: store.metadata.baseline_file_version,
                expected: BASELINE_FILE_VERSION,
            });
        }

        store.rebuild_index();
        Ok(Some(store))
    }

    /// Writes the baseline to `path`, replacing any previous file.
    ///
    /// Keys are ordered (`paths` is a `BTreeMap`) and the output is pretty
    /// printed, so the file diffs cleanly under version control. The derived
    /// index is never written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|source| WardenError::CorruptBaseline {
                source,
                path: path.to_path_buf(),
            })?;
        fs::write(path, content).map_err(|source| WardenError::Io {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Rebuilds the mutable candidate index from the persisted view.
    fn rebuild_index(&mut self) {
        self.index.clear();
        for (filename, violations) in &self.paths {
            let grouped = self.index.entry(filename.clone()).or_default();
            for violation in violations {
                grouped
                    .entry(violation.key())
                    .or_default()
                    .push(violation.clone());
            }
        }
    }
}
