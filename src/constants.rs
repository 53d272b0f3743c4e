// src/constants.rs
//! Fixed name lists shared by the naming and complexity checks.

/// Names that carry no meaning and are always worth renaming.
pub const BAD_VARIABLE_NAMES: &[&str] = &[
    "data", "result", "results", "item", "items", "value", "values", "val", "vals", "var", "vars",
    "content", "contents", "info", "handle", "handler",
];

/// Module-level dunder assignments we consider metadata noise.
pub const BAD_MODULE_METADATA_VARIABLES: &[&str] =
    &["__author__", "__all__", "__version__", "__about__"];

/// Class names allowed to be nested inside another class.
pub const NESTED_CLASSES_WHITELIST: &[&str] = &["Meta"];

/// Function names allowed to be nested inside another function.
pub const NESTED_FUNCTIONS_WHITELIST: &[&str] = &["decorator", "factory"];

/// Directories never worth descending into during discovery.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    ".eggs",
    "node_modules",
    "build",
    "dist",
];

/// Returns true if a directory entry should be pruned from the walk.
#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name) || name.ends_with(".egg-info")
}
