//! Error taxonomy for the registry engine.
//!
//! Extraction-level defects self-heal by omission (soft-skips return
//! `None` and log), so the hard errors here cover I/O, malformed
//! documents, and blocking validation failures at assembly.

use std::path::PathBuf;

/// One validation finding, blocking or advisory depending on which list
/// it was collected into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Piece id, or the offending filename when no id could be read.
    pub piece: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(piece: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            piece: piece.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.piece, self.message)
    }
}

/// Errors that can occur while extracting, validating, or assembling.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("source directory not found: {path}")]
    SourceMissing { path: PathBuf },

    #[error("validation failed with {} blocking error(s)", errors.len())]
    ValidationFailed {
        errors: Vec<ValidationIssue>,
        warnings: Vec<ValidationIssue>,
    },
}

impl RegistryError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a JSON error with the document it occurred in.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
