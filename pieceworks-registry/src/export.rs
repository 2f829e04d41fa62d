//! Pretty-printed JSON export of registry artifacts.

use std::path::Path;

use pieceworks_core::errors::RegistryError;
use pieceworks_core::{Piece, PieceDetail, Registry};

/// Write one serializable document as pretty-printed JSON.
pub fn write_document<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RegistryError::io(parent, e))?;
    }
    let mut text = serde_json::to_string_pretty(value).map_err(|e| RegistryError::json(path, e))?;
    text.push('\n');
    std::fs::write(path, text).map_err(|e| RegistryError::io(path, e))
}

/// Write per-piece documents as `{id}.json` under `dir`.
pub fn write_piece_docs(dir: &Path, pieces: &[Piece]) -> Result<(), RegistryError> {
    for piece in pieces {
        write_document(&dir.join(piece.filename()), piece)?;
    }
    Ok(())
}

/// Write per-piece detail documents as `{id}.json` under `dir`.
pub fn write_detail_docs(dir: &Path, details: &[PieceDetail]) -> Result<(), RegistryError> {
    for detail in details {
        write_document(&dir.join(format!("{}.json", detail.id)), detail)?;
    }
    Ok(())
}

/// Write the aggregate registry document.
pub fn write_registry(path: &Path, registry: &Registry) -> Result<(), RegistryError> {
    write_document(path, registry)
}
