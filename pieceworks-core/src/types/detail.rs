//! The per-piece detail document: actions/triggers keyed by name, with props.
//!
//! Trigger delivery is serialized in the detail wire form (`WEBHOOK` /
//! `POLLING`) rather than the registry form (`instant` / `scheduled`).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::enums::{AuthType, TriggerKind};
use super::piece::Property;

/// Auth block of a detail document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthBlock {
    #[serde(rename = "type")]
    pub auth_type: AuthType,
}

/// One action in a detail document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDetail {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub props: Vec<Property>,
    /// Provenance marker; present only for fallback-substituted records.
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// One trigger in a detail document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerDetail {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        rename = "type",
        serialize_with = "serialize_wire_kind",
        deserialize_with = "deserialize_wire_kind",
        default
    )]
    pub kind: TriggerKind,
    #[serde(default)]
    pub props: Vec<Property>,
    /// Provenance marker; present only for fallback-substituted records.
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The per-piece detail document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceDetail {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub auth: AuthBlock,
    pub actions: BTreeMap<String, ActionDetail>,
    pub triggers: BTreeMap<String, TriggerDetail>,
}

fn serialize_wire_kind<S: Serializer>(kind: &TriggerKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.wire_code())
}

fn deserialize_wire_kind<'de, D: Deserializer<'de>>(d: D) -> Result<TriggerKind, D::Error> {
    let code = String::deserialize(d)?;
    Ok(TriggerKind::from_wire_code(&code))
}
