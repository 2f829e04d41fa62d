//! Trigger-artifact extraction and delivery classification.

use pieceworks_core::TriggerKind;

use crate::record::{ExtractedTrigger, Provenance};

use super::Extractor;

/// Strategy markers mapped to delivery kinds. The marker found earliest
/// in the document wins; ties fall back to table order.
pub const TRIGGER_STRATEGY_MARKERS: &[(&str, TriggerKind)] = &[
    ("TriggerStrategy.WEBHOOK", TriggerKind::Instant),
    ("TriggerStrategy.APP_WEBHOOK", TriggerKind::Instant),
    ("TriggerStrategy.POLLING", TriggerKind::Scheduled),
];

/// Classify a trigger artifact's delivery kind by scanning the whole text
/// for strategy markers. No marker defaults to scheduled.
pub fn classify_delivery(text: &str) -> TriggerKind {
    let mut found: Option<(usize, TriggerKind)> = None;
    for (marker, kind) in TRIGGER_STRATEGY_MARKERS {
        if let Some(pos) = text.find(marker) {
            match found {
                Some((best, _)) if best <= pos => {}
                _ => found = Some((pos, *kind)),
            }
        }
    }
    found.map(|(_, kind)| kind).unwrap_or_default()
}

pub(super) fn parse_trigger(text: &str, extractor: &Extractor) -> Option<ExtractedTrigger> {
    if !extractor.has_trigger_marker(text) {
        return None;
    }

    let fields = extractor.fields();
    let name = fields.name(text)?;
    let display_name = fields.display_name(text).unwrap_or_else(|| name.clone());
    let description = fields.description(text).unwrap_or_default();
    let kind = classify_delivery(text);
    let props = extractor.props().extract(text, fields);

    Some(ExtractedTrigger {
        name,
        display_name,
        description,
        kind,
        props,
        provenance: Provenance::Extracted,
    })
}
