//! Structural validation of per-piece documents.
//!
//! Validation runs over the raw JSON values so one malformed document
//! yields every defect it contains, not just the first serde failure.
//! Blocking errors exclude a piece from assembly; advisories never do.

use pieceworks_core::constants::PACKAGE_PREFIX;
use pieceworks_core::errors::ValidationIssue;
use pieceworks_core::{AuthType, Category, FxHashSet, Piece, TriggerKind};
use serde_json::Value;

use crate::load::PieceFile;

/// Top-level fields every piece document must carry.
const REQUIRED_FIELDS: &[&str] = &[
    "id",
    "package",
    "display_name",
    "display_name_ar",
    "description",
    "category",
    "auth_type",
    "actions",
    "triggers",
];

/// Outcome of validating a batch of piece files: the decoded survivors
/// plus every blocking error and advisory found.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub pieces: Vec<Piece>,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_blocked(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Validate every loaded file. Files that produce no blocking error are
/// decoded into typed pieces; the rest are excluded.
pub fn validate_all(files: &[PieceFile]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_ids: FxHashSet<String> = FxHashSet::default();

    for file in files {
        let Some(document) = &file.document else {
            let detail = file.parse_error.as_deref().unwrap_or("unreadable");
            report
                .errors
                .push(ValidationIssue::new(&file.filename, format!("invalid JSON: {detail}")));
            continue;
        };

        let before = report.errors.len();
        validate_piece(&file.filename, document, &mut report);

        if let Some(id) = document.get("id").and_then(Value::as_str) {
            if !seen_ids.insert(id.to_string()) {
                report
                    .errors
                    .push(ValidationIssue::new(id, "duplicate id across piece files"));
            }
        }

        if report.errors.len() == before {
            match serde_json::from_value::<Piece>(document.clone()) {
                Ok(piece) => report.pieces.push(piece),
                Err(e) => report
                    .errors
                    .push(ValidationIssue::new(&file.filename, format!("undecodable document: {e}"))),
            }
        }
    }

    report
}

/// Validate one document against the piece schema, collecting blocking
/// errors and advisories into the report.
pub fn validate_piece(filename: &str, document: &Value, report: &mut ValidationReport) {
    let Some(obj) = document.as_object() else {
        report
            .errors
            .push(ValidationIssue::new(filename, "document is not a JSON object"));
        return;
    };

    let id = obj.get("id").and_then(Value::as_str).unwrap_or(filename);

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(*field) {
            report
                .errors
                .push(ValidationIssue::new(id, format!("missing required field `{field}`")));
        }
    }

    if let Some(id_value) = obj.get("id").and_then(Value::as_str) {
        if id_value.chars().any(|c| c.is_ascii_uppercase()) {
            report
                .errors
                .push(ValidationIssue::new(id_value, "id must be lowercase"));
        }
        if id_value.chars().any(char::is_whitespace) {
            report
                .errors
                .push(ValidationIssue::new(id_value, "id must not contain whitespace"));
        }
        let expected = format!("{id_value}.json");
        if filename != expected {
            report.errors.push(ValidationIssue::new(
                id_value,
                format!("filename `{filename}` does not match id (expected `{expected}`)"),
            ));
        }
    }

    if let Some(package) = obj.get("package").and_then(Value::as_str) {
        if !package.starts_with(PACKAGE_PREFIX) {
            report.errors.push(ValidationIssue::new(
                id,
                format!("package `{package}` must start with `{PACKAGE_PREFIX}`"),
            ));
        }
    }

    if let Some(category) = obj.get("category").and_then(Value::as_str) {
        if Category::from_code(category).is_none() {
            report
                .errors
                .push(ValidationIssue::new(id, format!("unknown category `{category}`")));
        }
    }

    if let Some(auth) = obj.get("auth_type").and_then(Value::as_str) {
        if AuthType::from_code(auth).is_none() {
            report
                .errors
                .push(ValidationIssue::new(id, format!("unknown auth_type `{auth}`")));
        }
    }

    let action_count = validate_entries(id, obj.get("actions"), "action", false, report);
    let trigger_count = validate_entries(id, obj.get("triggers"), "trigger", true, report);

    if obj.get("_source").and_then(Value::as_str).is_none() {
        report
            .warnings
            .push(ValidationIssue::new(id, "missing _source provenance label"));
    }
    if action_count == Some(0) && trigger_count == Some(0) {
        report
            .warnings
            .push(ValidationIssue::new(id, "piece has no actions and no triggers"));
    }
}

/// Validate one action or trigger list. Returns the entry count when the
/// field is a well-formed array, None otherwise.
fn validate_entries(
    id: &str,
    value: Option<&Value>,
    label: &str,
    is_trigger: bool,
    report: &mut ValidationReport,
) -> Option<usize> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(_) => {
            report
                .errors
                .push(ValidationIssue::new(id, format!("{label}s must be an array")));
            return None;
        }
        None => return None,
    };

    let mut names: FxHashSet<&str> = FxHashSet::default();
    for (index, item) in items.iter().enumerate() {
        let Some(entry) = item.as_object() else {
            report
                .errors
                .push(ValidationIssue::new(id, format!("{label} #{index} is not an object")));
            continue;
        };

        match entry.get("name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => {
                if !names.insert(name) {
                    report.errors.push(ValidationIssue::new(
                        id,
                        format!("duplicate {label} name `{name}`"),
                    ));
                }
                if entry.get("display_name").and_then(Value::as_str).is_none() {
                    report.warnings.push(ValidationIssue::new(
                        id,
                        format!("{label} `{name}` missing display_name"),
                    ));
                }
                if entry.get("description").and_then(Value::as_str).is_none() {
                    report.warnings.push(ValidationIssue::new(
                        id,
                        format!("{label} `{name}` missing description"),
                    ));
                }
            }
            _ => report.errors.push(ValidationIssue::new(
                id,
                format!("{label} #{index} has no non-empty name"),
            )),
        }

        if is_trigger {
            if let Some(kind) = entry.get("type").and_then(Value::as_str) {
                if TriggerKind::from_code(kind).is_none() {
                    report.errors.push(ValidationIssue::new(
                        id,
                        format!("{label} type `{kind}` is not a known delivery kind"),
                    ));
                }
            }
        }
    }

    Some(items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, document: serde_json::Value) -> PieceFile {
        PieceFile {
            path: name.into(),
            filename: name.to_string(),
            document: Some(document),
            parse_error: None,
        }
    }

    fn valid_doc(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "package": format!("@activepieces/piece-{id}"),
            "display_name": "Some Piece",
            "display_name_ar": "",
            "description": "A piece",
            "category": "G_productivity",
            "auth_type": "secret_text",
            "actions": [{ "name": "do_it", "display_name": "Do It", "description": "" }],
            "triggers": [],
            "_source": "test"
        })
    }

    #[test]
    fn valid_document_decodes_with_no_errors() {
        let report = validate_all(&[file("slack.json", valid_doc("slack"))]);
        assert!(report.errors.is_empty());
        assert_eq!(report.pieces.len(), 1);
        assert_eq!(report.pieces[0].id, "slack");
    }

    #[test]
    fn missing_fields_and_bad_enums_block() {
        let mut doc = valid_doc("slack");
        doc.as_object_mut().unwrap().remove("package");
        doc["category"] = "Z_unknown".into();
        doc["auth_type"] = "password".into();

        let report = validate_all(&[file("slack.json", doc)]);
        assert!(report.is_blocked());
        assert!(report.pieces.is_empty());
        let messages: Vec<_> = report.errors.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("`package`")));
        assert!(messages.iter().any(|m| m.contains("Z_unknown")));
        assert!(messages.iter().any(|m| m.contains("password")));
    }

    #[test]
    fn filename_must_match_id() {
        let report = validate_all(&[file("wrong.json", valid_doc("slack"))]);
        assert!(report
            .errors
            .iter()
            .any(|e| e.message.contains("does not match id")));
    }

    #[test]
    fn id_shape_is_enforced() {
        let mut doc = valid_doc("slack");
        doc["id"] = "My Slack".into();
        let report = validate_all(&[file("My Slack.json", doc)]);
        let messages: Vec<_> = report.errors.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("lowercase")));
        assert!(messages.iter().any(|m| m.contains("whitespace")));
    }

    #[test]
    fn duplicate_ids_across_files_block() {
        let report = validate_all(&[
            file("slack.json", valid_doc("slack")),
            file("slack.json", valid_doc("slack")),
        ]);
        assert!(report
            .errors
            .iter()
            .any(|e| e.message.contains("duplicate id")));
        assert_eq!(report.pieces.len(), 1);
    }

    #[test]
    fn duplicate_entry_names_block() {
        let mut doc = valid_doc("slack");
        doc["actions"] = serde_json::json!([
            { "name": "send", "display_name": "A", "description": "" },
            { "name": "send", "display_name": "B", "description": "" }
        ]);
        let report = validate_all(&[file("slack.json", doc)]);
        assert!(report
            .errors
            .iter()
            .any(|e| e.message.contains("duplicate action name")));
    }

    #[test]
    fn bad_trigger_type_blocks() {
        let mut doc = valid_doc("slack");
        doc["triggers"] = serde_json::json!([
            { "name": "t", "display_name": "T", "description": "", "type": "WEBHOOK" }
        ]);
        let report = validate_all(&[file("slack.json", doc)]);
        assert!(report
            .errors
            .iter()
            .any(|e| e.message.contains("delivery kind")));
    }

    #[test]
    fn advisories_never_block() {
        let mut doc = valid_doc("quiet");
        doc["actions"] = serde_json::json!([]);
        doc.as_object_mut().unwrap().remove("_source");
        // _source is typed Option, so removal stays decodable.
        let report = validate_all(&[file("quiet.json", doc)]);
        assert!(!report.is_blocked());
        assert_eq!(report.pieces.len(), 1);
        let warned: Vec<_> = report.warnings.iter().map(|w| w.message.as_str()).collect();
        assert!(warned.iter().any(|m| m.contains("_source")));
        assert!(warned.iter().any(|m| m.contains("no actions and no triggers")));
    }

    #[test]
    fn malformed_json_is_a_blocking_error() {
        let broken = PieceFile {
            path: "broken.json".into(),
            filename: "broken.json".into(),
            document: None,
            parse_error: Some("expected value at line 1".into()),
        };
        let report = validate_all(&[broken, file("slack.json", valid_doc("slack"))]);
        assert!(report.is_blocked());
        assert_eq!(report.pieces.len(), 1);
        assert!(report.errors[0].message.contains("invalid JSON"));
    }
}
