//! Extraction run configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REGISTRY_VERSION, DEFAULT_SOURCE_LABEL};
use crate::errors::RegistryError;

/// Configuration for one extraction run over a connector source tree.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractConfig {
    /// Root directory containing one subdirectory per connector.
    pub source_dir: Option<PathBuf>,
    /// Path to the secondary fallback dataset document.
    pub fallback_path: Option<PathBuf>,
    /// Output directory; pieces/, details/, and the registry document are
    /// written beneath it.
    pub output_dir: Option<PathBuf>,
    /// Number of rayon threads. 0 = library default.
    pub threads: Option<usize>,
    /// Version tag stamped into the registry metadata.
    pub version: Option<String>,
    /// Provenance label stamped into every extracted piece.
    pub source_label: Option<String>,
}

impl ExtractConfig {
    /// Load from a TOML file.
    pub fn from_toml_path(path: &Path) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        toml::from_str(&text).map_err(|e| RegistryError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Returns the effective version tag.
    pub fn effective_version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_REGISTRY_VERSION)
    }

    /// Returns the effective provenance label.
    pub fn effective_source_label(&self) -> &str {
        self.source_label.as_deref().unwrap_or(DEFAULT_SOURCE_LABEL)
    }

    /// Returns the effective thread count, defaulting to 0 (library default).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }
}
