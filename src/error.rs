// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WardenError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Corrupt baseline file {path}: {source}")]
    CorruptBaseline {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Unsupported baseline file version '{found}' (expected '{expected}')")]
    BaselineVersion { found: String, expected: &'static str },

    #[error("Failed to load Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Parser produced no tree for {0}")]
    Parse(PathBuf),
}

pub type Result<T> = std::result::Result<T, WardenError>;

// Allow `?` on std::io::Error by converting to WardenError::Io with unknown path.
impl From<std::io::Error> for WardenError {
    fn from(source: std::io::Error) -> Self {
        WardenError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
