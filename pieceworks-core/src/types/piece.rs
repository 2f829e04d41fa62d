//! The per-piece registry document and its nested records.

use serde::{Deserialize, Serialize};

use super::enums::{AuthType, Category, TriggerKind};

/// One configurable parameter of an action or trigger.
///
/// `prop_type` is a normalized tag (e.g. `SHORT_TEXT`, `DROPDOWN`) when the
/// source token is recognized; unrecognized tokens pass through verbatim
/// with their namespace prefix stripped, so this stays a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

/// Action entry as it appears in a piece document (no props).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSummary {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

/// Trigger entry as it appears in a piece document (no props).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSummary {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: TriggerKind,
}

/// One catalog entry representing an integration with an external service.
///
/// This is the persisted per-piece document: the filename (where persisted
/// per-piece) must equal `id`, and `id` is globally unique across the
/// registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: String,
    pub package: String,
    pub display_name: String,
    /// Secondary-language label; may be empty pending translation.
    pub display_name_ar: String,
    pub description: String,
    pub category: Category,
    pub auth_type: AuthType,
    pub actions: Vec<ActionSummary>,
    pub triggers: Vec<TriggerSummary>,
    #[serde(rename = "_verified", default)]
    pub verified: bool,
    #[serde(rename = "_verified_date", default)]
    pub verified_date: Option<String>,
    #[serde(rename = "_source", default)]
    pub source: Option<String>,
}

impl Piece {
    /// Expected filename for this piece when persisted per-piece.
    pub fn filename(&self) -> String {
        format!("{}.json", self.id)
    }
}
