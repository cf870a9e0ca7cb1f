use std::path::PathBuf;

use thiserror::Error;

/// Failures to obtain the installed package list. All of them abort the run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("package database not found at {path}")]
    DatabaseNotFound { path: PathBuf },

    #[error("unsupported package database version {found:?} in {path} (expected {expected})")]
    UnsupportedVersion {
        path: PathBuf,
        found: String,
        expected: u32,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed package description {path}: {reason}")]
    MalformedDesc { path: PathBuf, reason: String },

    #[error("invalid package manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.into(),
            source,
        }
    }
}
