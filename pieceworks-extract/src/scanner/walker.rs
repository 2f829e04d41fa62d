//! Directory walking over a connector source tree.
//!
//! One subdirectory per connector id. All listings are sorted
//! lexicographically so that extraction order — and therefore
//! first-occurrence-wins deduplication — is deterministic across runs.

use std::path::{Path, PathBuf};

use pieceworks_core::errors::RegistryError;

/// One connector directory: the id is the directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorDir {
    pub id: String,
    pub path: PathBuf,
}

/// List connector directories under the source root, sorted by id.
pub fn list_connector_dirs(root: &Path) -> Result<Vec<ConnectorDir>, RegistryError> {
    if !root.is_dir() {
        return Err(RegistryError::SourceMissing {
            path: root.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(root).map_err(|e| RegistryError::io(root, e))?;
    let mut dirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(id) = path.file_name().and_then(|n| n.to_str()) {
            dirs.push(ConnectorDir {
                id: id.to_string(),
                path,
            });
        }
    }
    dirs.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(dirs)
}

/// The connector's entry/index artifact.
pub fn entry_file(dir: &ConnectorDir) -> PathBuf {
    dir.path.join("src").join("index.ts")
}

/// Action-definition artifacts, sorted by filename. Index files are not
/// action definitions and are skipped.
pub fn action_files(dir: &ConnectorDir) -> Vec<PathBuf> {
    artifacts_in(&dir.path.join("src").join("lib").join("actions"), |name| {
        !name.starts_with("index")
    })
}

/// Trigger-definition artifacts, sorted by filename. Index files and
/// helper modules are skipped.
pub fn trigger_files(dir: &ConnectorDir) -> Vec<PathBuf> {
    artifacts_in(&dir.path.join("src").join("lib").join("triggers"), |name| {
        !name.starts_with("index") && !name.to_lowercase().contains("helper")
    })
}

/// All `.ts` source artifacts under the connector directory, recursively,
/// sorted by full path (the auth detector's stable traversal order).
pub fn source_files(dir: &ConnectorDir) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = ignore::WalkBuilder::new(&dir.path)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build()
        .flatten()
        .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "ts"))
        .collect();
    files.sort();
    files
}

fn artifacts_in(dir: &Path, keep: impl Fn(&str) -> bool) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "ts"))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| keep(name))
        })
        .collect();
    files.sort();
    files
}
