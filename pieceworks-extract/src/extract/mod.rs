//! Pattern-based text extraction over connector definition artifacts.
//!
//! This is best-effort lexical scanning, not a grammar-correct parser:
//! each field is an independent extractor over raw text with an explicit
//! no-match outcome. The one place requiring true nesting awareness —
//! property-block delimiting — uses an explicit brace-depth counter.

mod action;
mod fields;
mod index;
mod props;
mod trigger;

pub use action::custom_api_call_action;
pub use fields::FieldExtractor;
pub use index::IndexMeta;
pub use props::{normalize_prop_type, PropExtractor, PROP_TYPE_MAP};
pub use trigger::{classify_delivery, TRIGGER_STRATEGY_MARKERS};

use crate::record::{ExtractedAction, ExtractedTrigger};

/// Marker for the generic custom-API-call helper. Artifacts and entry
/// files containing it synthesize a canned action record.
pub const CUSTOM_API_CALL_MARKER: &str = "createCustomApiCallAction";

/// Pre-compiled extractor for all artifact kinds. Build once per run and
/// share across threads (all contained regexes are `Sync`).
pub struct Extractor {
    fields: FieldExtractor,
    props: PropExtractor,
    action_marker: Option<regex::Regex>,
    trigger_marker: Option<regex::Regex>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            fields: FieldExtractor::new(),
            props: PropExtractor::new(),
            action_marker: regex::Regex::new(r"createAction\s*\(\s*\{").ok(),
            trigger_marker: regex::Regex::new(r"createTrigger\s*\(\s*\{").ok(),
        }
    }

    /// Extract an action record from one artifact's text, or `None` when
    /// the artifact has no recognizable creation marker or no name.
    pub fn parse_action(&self, text: &str) -> Option<ExtractedAction> {
        action::parse_action(text, self)
    }

    /// Extract a trigger record from one artifact's text.
    pub fn parse_trigger(&self, text: &str) -> Option<ExtractedTrigger> {
        trigger::parse_trigger(text, self)
    }

    /// Extract piece-level metadata from the entry artifact's text.
    pub fn parse_index(&self, text: &str) -> IndexMeta {
        index::parse_index(text, self)
    }

    pub(crate) fn fields(&self) -> &FieldExtractor {
        &self.fields
    }

    pub(crate) fn props(&self) -> &PropExtractor {
        &self.props
    }

    pub(crate) fn has_action_marker(&self, text: &str) -> bool {
        self.action_marker.as_ref().is_some_and(|re| re.is_match(text))
    }

    pub(crate) fn has_trigger_marker(&self, text: &str) -> bool {
        self.trigger_marker.as_ref().is_some_and(|re| re.is_match(text))
    }
}
