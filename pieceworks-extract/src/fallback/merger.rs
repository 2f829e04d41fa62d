//! All-or-nothing fallback substitution.
//!
//! Substitution is wholesale per list: an empty primary list is replaced
//! by the normalized secondary list, never merged per item. A non-empty
//! primary list is left untouched even when the secondary source also has
//! records for the piece (partial-overlap merge is deliberately not
//! defined). Substituted records carry a fallback provenance tag.

use crate::record::{ExtractedAction, ExtractedTrigger, Provenance};

use super::schema::FallbackEntry;

/// Reconcile one piece's primary extraction against its fallback entry.
/// Returns possibly-substituted lists plus a backfilled display name.
pub fn apply_fallback(
    entry: &FallbackEntry,
    actions: &mut Vec<ExtractedAction>,
    triggers: &mut Vec<ExtractedTrigger>,
    display_name: &mut Option<String>,
) {
    if actions.is_empty() && !entry.actions.is_empty() {
        *actions = entry
            .actions
            .iter()
            .map(|record| ExtractedAction {
                name: record.name.clone(),
                display_name: record
                    .display_name
                    .clone()
                    .unwrap_or_else(|| record.name.clone()),
                description: record.description.clone().unwrap_or_default(),
                props: record.normalized_props(),
                provenance: Provenance::Fallback,
            })
            .collect();
    }

    if triggers.is_empty() && !entry.triggers.is_empty() {
        *triggers = entry
            .triggers
            .iter()
            .map(|record| ExtractedTrigger {
                name: record.name.clone(),
                display_name: record
                    .display_name
                    .clone()
                    .unwrap_or_else(|| record.name.clone()),
                description: record.description.clone().unwrap_or_default(),
                kind: record.trigger_kind(),
                props: record.normalized_props(),
                provenance: Provenance::Fallback,
            })
            .collect();
    }

    // Display name is backfilled only when primary extraction produced none.
    if display_name.is_none() {
        display_name.clone_from(&entry.display_name);
    }
}
