// src/discovery.rs
//! Finds Python sources under the requested roots.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::should_prune;

/// Walks the given roots and collects `.py` files, pruning virtualenv and
/// VCS directories. Explicitly named files are taken as-is.
#[must_use]
pub fn discover(roots: &[PathBuf], verbose: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut error_count = 0;

    for root in roots {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !should_prune(&e.file_name().to_string_lossy()));
        for item in walker {
            match item {
                Ok(entry) => {
                    if entry.file_type().is_file() && is_python_file(entry.path()) {
                        let p = entry.path().strip_prefix(".").unwrap_or(entry.path());
                        files.push(p.to_path_buf());
                    }
                }
                Err(_) => error_count += 1,
            }
        }
    }

    if error_count > 0 && verbose {
        eprintln!("WARN: Encountered {error_count} errors during file walk");
    }

    files.sort();
    files
}

fn is_python_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "py")
}
