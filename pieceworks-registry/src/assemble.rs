//! Pure registry assembly over validated pieces.

use pieceworks_core::{Piece, Registry, RegistryMetadata};

/// Fold validated pieces into a registry document: sort by
/// (category, id), count, and stamp metadata. Piece records are never
/// mutated.
pub fn assemble(
    mut pieces: Vec<Piece>,
    version: &str,
    source: &str,
    total_props: Option<usize>,
) -> Registry {
    pieces.sort_by(|a, b| (a.category, &a.id).cmp(&(b.category, &b.id)));

    let total_actions = pieces.iter().map(|p| p.actions.len()).sum();
    let total_triggers = pieces.iter().map(|p| p.triggers.len()).sum();
    let verified_count = pieces.iter().filter(|p| p.verified).count();

    let metadata = RegistryMetadata {
        version: version.to_string(),
        source: source.to_string(),
        extracted_date: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        total_pieces: pieces.len(),
        total_actions,
        total_triggers,
        total_props,
        verified_count,
        unverified_count: pieces.len() - verified_count,
    };

    tracing::info!(
        pieces = metadata.total_pieces,
        actions = metadata.total_actions,
        triggers = metadata.total_triggers,
        version = %metadata.version,
        "registry assembled"
    );

    Registry { metadata, pieces }
}
