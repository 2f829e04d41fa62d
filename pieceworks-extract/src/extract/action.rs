//! Action-artifact extraction.

use crate::record::{ExtractedAction, Provenance};

use super::{Extractor, CUSTOM_API_CALL_MARKER};

/// The canned record synthesized for the generic custom-API-call helper.
pub fn custom_api_call_action() -> ExtractedAction {
    ExtractedAction {
        name: "custom_api_call".to_string(),
        display_name: "Custom API Call".to_string(),
        description: "Make a custom API call".to_string(),
        props: Vec::new(),
        provenance: Provenance::Extracted,
    }
}

pub(super) fn parse_action(text: &str, extractor: &Extractor) -> Option<ExtractedAction> {
    if !extractor.has_action_marker(text) {
        if text.contains(CUSTOM_API_CALL_MARKER) {
            return Some(custom_api_call_action());
        }
        return None;
    }

    let fields = extractor.fields();
    // Name is the only hard requirement; everything else degrades.
    let name = fields.name(text)?;
    let display_name = fields.display_name(text).unwrap_or_else(|| name.clone());
    let description = fields.description(text).unwrap_or_default();
    let props = extractor.props().extract(text, fields);

    Some(ExtractedAction {
        name,
        display_name,
        description,
        props,
        provenance: Provenance::Extracted,
    })
}
