//! The secondary dataset's external schema and its adapter into canonical
//! records.
//!
//! The fallback document is keyed by piece id, with props stored as a
//! mapping from property name to descriptor — a distinct external shape.
//! This module is the only place that knows it; schema drift in the
//! secondary source touches nothing else. Decoding is tolerant per entry
//! and per record: malformed values are skipped, never fatal.

use std::path::Path;

use pieceworks_core::errors::RegistryError;
use pieceworks_core::{FxHashMap, Property, TriggerKind};
use serde::Deserialize;

/// Default property type when the secondary descriptor omits one.
const DEFAULT_PROP_TYPE: &str = "SHORT_TEXT";

/// One action or trigger record as the secondary source describes it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FallbackRecord {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Trigger delivery in the secondary wire form (`WEBHOOK`/`POLLING`);
    /// absent for actions.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Property name → descriptor. Non-object descriptors are dropped at
    /// normalization.
    pub props: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FallbackProp {
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    #[serde(rename = "type")]
    prop_type: Option<String>,
    required: Option<bool>,
}

impl FallbackRecord {
    /// Delivery kind at the fallback-merge boundary: `WEBHOOK` is
    /// instant, anything else (including absent) is scheduled.
    pub fn trigger_kind(&self) -> TriggerKind {
        self.kind
            .as_deref()
            .map(TriggerKind::from_wire_code)
            .unwrap_or_default()
    }

    /// Project the props mapping into the canonical ordered sequence.
    pub fn normalized_props(&self) -> Vec<Property> {
        let Some(props) = &self.props else {
            return Vec::new();
        };
        props
            .iter()
            .filter_map(|(name, value)| {
                let descriptor: FallbackProp = serde_json::from_value(value.clone()).ok()?;
                Some(Property {
                    name: name.clone(),
                    display_name: descriptor.display_name.unwrap_or_else(|| name.clone()),
                    prop_type: descriptor
                        .prop_type
                        .unwrap_or_else(|| DEFAULT_PROP_TYPE.to_string()),
                    required: descriptor.required.unwrap_or(false),
                    description: String::new(),
                })
            })
            .collect()
    }
}

/// One piece's fallback entry.
#[derive(Debug, Clone, Default)]
pub struct FallbackEntry {
    pub display_name: Option<String>,
    pub actions: Vec<FallbackRecord>,
    pub triggers: Vec<FallbackRecord>,
}

/// The whole secondary dataset, loaded once and read by every piece's
/// merge step.
#[derive(Debug, Clone, Default)]
pub struct FallbackDataset {
    entries: FxHashMap<String, FallbackEntry>,
}

impl FallbackDataset {
    /// Load and adapt the dataset document. The document itself must be
    /// valid JSON; individual entries degrade gracefully.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| RegistryError::json(path, e))?;
        Ok(Self::from_value(value))
    }

    /// Adapt an already-parsed dataset document.
    pub fn from_value(value: serde_json::Value) -> Self {
        let mut entries = FxHashMap::default();
        let Some(map) = value.as_object() else {
            return Self { entries };
        };
        for (id, entry) in map {
            let Some(obj) = entry.as_object() else {
                tracing::warn!(piece = %id, "fallback entry is not an object, skipped");
                continue;
            };
            entries.insert(
                id.clone(),
                FallbackEntry {
                    display_name: obj
                        .get("displayName")
                        .and_then(|v| v.as_str())
                        .map(str::to_string),
                    actions: decode_records(obj.get("actions")),
                    triggers: decode_records(obj.get("triggers")),
                },
            );
        }
        Self { entries }
    }

    pub fn get(&self, piece_id: &str) -> Option<&FallbackEntry> {
        self.entries.get(piece_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decode_records(value: Option<&serde_json::Value>) -> Vec<FallbackRecord> {
    let Some(items) = value.and_then(|v| v.as_array()) else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}
