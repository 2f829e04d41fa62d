//! Entry/index artifact extraction: piece-level display metadata.

use super::{Extractor, CUSTOM_API_CALL_MARKER};

/// Piece-level metadata recovered from the entry artifact. Every field is
/// optional; absent markers simply yield fewer fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexMeta {
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// The entry artifact registers the generic custom-API-call action
    /// inline.
    pub has_custom_api_call: bool,
}

pub(super) fn parse_index(text: &str, extractor: &Extractor) -> IndexMeta {
    let fields = extractor.fields();
    IndexMeta {
        display_name: fields.display_name(text),
        description: fields.description(text),
        has_custom_api_call: text.contains(CUSTOM_API_CALL_MARKER),
    }
}
