//! Name-based deduplication: first occurrence wins, survivor order stable.

use pieceworks_core::FxHashSet;

use crate::record::Named;

/// Collapse repeated records by name, keeping the first occurrence of
/// each name and preserving the relative order of survivors.
pub fn dedup_by_name<T: Named>(records: Vec<T>) -> Vec<T> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    records
        .into_iter()
        .filter(|r| seen.insert(r.name().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ExtractedAction, Provenance};

    fn action(name: &str, display: &str) -> ExtractedAction {
        ExtractedAction {
            name: name.into(),
            display_name: display.into(),
            description: String::new(),
            props: Vec::new(),
            provenance: Provenance::Extracted,
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let deduped = dedup_by_name(vec![
            action("list_items", "first"),
            action("create_item", "keep"),
            action("list_items", "second"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "list_items");
        assert_eq!(deduped[0].display_name, "first");
        assert_eq!(deduped[1].name, "create_item");
    }

    #[test]
    fn empty_input_is_fine() {
        let deduped: Vec<ExtractedAction> = dedup_by_name(Vec::new());
        assert!(deduped.is_empty());
    }
}
