//! Per-piece document loading.

use std::path::{Path, PathBuf};

use pieceworks_core::errors::RegistryError;

/// One `*.json` file from the pieces directory, parsed when possible.
/// Malformed JSON keeps the file in the list with the parse error
/// attached, so validation can report it as a blocking defect.
#[derive(Debug, Clone)]
pub struct PieceFile {
    pub path: PathBuf,
    pub filename: String,
    pub document: Option<serde_json::Value>,
    pub parse_error: Option<String>,
}

/// List and parse every `*.json` in the pieces directory, sorted by
/// filename. Directory-level I/O failures are hard errors; per-file
/// defects are deferred to validation.
pub fn load_piece_files(dir: &Path) -> Result<Vec<PieceFile>, RegistryError> {
    if !dir.is_dir() {
        return Err(RegistryError::SourceMissing {
            path: dir.to_path_buf(),
        });
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| RegistryError::io(dir, e))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let text = std::fs::read_to_string(&path).map_err(|e| RegistryError::io(&path, e))?;
        let (document, parse_error) = match serde_json::from_str(&text) {
            Ok(value) => (Some(value), None),
            Err(e) => (None, Some(e.to_string())),
        };
        files.push(PieceFile {
            path,
            filename,
            document,
            parse_error,
        });
    }

    tracing::debug!(dir = %dir.display(), files = files.len(), "piece documents loaded");
    Ok(files)
}
