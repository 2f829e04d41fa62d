//! Build (validate-and-assemble) run configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for assembling a registry from per-piece documents.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory of per-piece `{id}.json` documents.
    pub pieces_dir: PathBuf,
    /// Output path for the assembled registry document.
    pub output_file: PathBuf,
    /// Validate only; never write output.
    pub check_only: bool,
    /// Version tag stamped into the registry metadata.
    pub version: Option<String>,
    /// Source label stamped into the registry metadata. Defaults to the
    /// pieces directory path.
    pub source: Option<String>,
}
