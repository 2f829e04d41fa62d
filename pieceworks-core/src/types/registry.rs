//! The assembled registry document: metadata block plus sorted pieces.

use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// Aggregate metadata stamped onto an assembled registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryMetadata {
    pub version: String,
    pub source: String,
    pub extracted_date: String,
    pub total_pieces: usize,
    pub total_actions: usize,
    pub total_triggers: usize,
    /// Property count is only known when assembling straight from
    /// extraction; builds over summary documents omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_props: Option<usize>,
    pub verified_count: usize,
    pub unverified_count: usize,
}

/// The final aggregated registry: metadata plus pieces sorted by
/// (category, id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(rename = "_metadata")]
    pub metadata: RegistryMetadata,
    pub pieces: Vec<Piece>,
}
