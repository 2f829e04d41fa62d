//! Internal extraction records: full action/trigger shapes with props and
//! provenance, before projection into the piece and detail documents.

use pieceworks_core::{ActionDetail, ActionSummary, Property, TriggerDetail, TriggerKind, TriggerSummary};

/// Where a record came from: primary extraction or fallback substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Extracted,
    Fallback,
}

impl Provenance {
    /// Marker written into detail documents; absent for primary records.
    pub fn tag(self) -> Option<String> {
        match self {
            Self::Extracted => None,
            Self::Fallback => Some("fallback".to_string()),
        }
    }
}

/// A record with a machine-identifier name, for deduplication.
pub trait Named {
    fn name(&self) -> &str;
}

/// Fully extracted action, including props.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedAction {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub props: Vec<Property>,
    pub provenance: Provenance,
}

impl ExtractedAction {
    /// Project into the piece-document summary shape.
    pub fn to_summary(&self) -> ActionSummary {
        ActionSummary {
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
        }
    }

    /// Project into the detail-document shape, keyed by name.
    pub fn to_detail(&self) -> (String, ActionDetail) {
        (
            self.name.clone(),
            ActionDetail {
                display_name: self.display_name.clone(),
                description: self.description.clone(),
                props: self.props.clone(),
                source: self.provenance.tag(),
            },
        )
    }
}

impl Named for ExtractedAction {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Fully extracted trigger, including props and delivery kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTrigger {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub kind: TriggerKind,
    pub props: Vec<Property>,
    pub provenance: Provenance,
}

impl ExtractedTrigger {
    /// Project into the piece-document summary shape.
    pub fn to_summary(&self) -> TriggerSummary {
        TriggerSummary {
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            kind: self.kind,
        }
    }

    /// Project into the detail-document shape, keyed by name.
    pub fn to_detail(&self) -> (String, TriggerDetail) {
        (
            self.name.clone(),
            TriggerDetail {
                display_name: self.display_name.clone(),
                description: self.description.clone(),
                kind: self.kind,
                props: self.props.clone(),
                source: self.provenance.tag(),
            },
        )
    }
}

impl Named for ExtractedTrigger {
    fn name(&self) -> &str {
        &self.name
    }
}
