//! Per-connector extraction pipeline.
//!
//! Each connector directory maps to one immutable piece value through a
//! pure fold: index metadata + auth detection + action/trigger extraction
//! + fallback reconciliation + deduplication + category classification.
//! Connectors are independent, so the run is parallel across directories;
//! within a piece, artifact order is the sorted traversal order, keeping
//! first-occurrence-wins deduplication deterministic across runs.

use std::collections::BTreeMap;
use std::path::Path;

use pieceworks_core::constants::package_for;
use pieceworks_core::errors::RegistryError;
use pieceworks_core::{AuthBlock, Piece, PieceDetail};
use rayon::prelude::*;

use crate::auth::AuthDetector;
use crate::categories;
use crate::dedup::dedup_by_name;
use crate::extract::{custom_api_call_action, Extractor};
use crate::fallback::{apply_fallback, FallbackDataset};
use crate::record::{ExtractedAction, ExtractedTrigger};
use crate::scanner::{self, ConnectorDir};

/// One connector's extraction output: the piece document, its detail
/// document, and the property count for aggregate stats.
#[derive(Debug, Clone)]
pub struct ExtractedPiece {
    pub piece: Piece,
    pub detail: PieceDetail,
    pub prop_count: usize,
}

/// The extraction engine: pattern extractors and the fallback dataset,
/// built once and shared read-only across worker threads.
pub struct ExtractionEngine {
    extractor: Extractor,
    auth: AuthDetector,
    fallback: FallbackDataset,
    source_label: String,
    verified_date: String,
}

impl ExtractionEngine {
    pub fn new(fallback: FallbackDataset, source_label: impl Into<String>) -> Self {
        Self {
            extractor: Extractor::new(),
            auth: AuthDetector::new(),
            fallback,
            source_label: source_label.into(),
            verified_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Extract every connector under the source root, in parallel.
    /// Output order matches the sorted connector-directory order.
    pub fn extract_all(&self, root: &Path) -> Result<Vec<ExtractedPiece>, RegistryError> {
        let dirs = scanner::list_connector_dirs(root)?;
        tracing::info!(connectors = dirs.len(), root = %root.display(), "extraction started");
        Ok(dirs.par_iter().map(|dir| self.extract_piece(dir)).collect())
    }

    /// Extract one connector directory into an immutable piece record.
    pub fn extract_piece(&self, dir: &ConnectorDir) -> ExtractedPiece {
        let index_text = read_artifact(&scanner::entry_file(dir));
        let meta = index_text
            .as_deref()
            .map(|text| self.extractor.parse_index(text))
            .unwrap_or_default();

        let auth_type = self.auth.detect(dir);

        let mut actions: Vec<ExtractedAction> = scanner::action_files(dir)
            .iter()
            .filter_map(|path| read_artifact(path))
            .filter_map(|text| self.extractor.parse_action(&text))
            .collect();

        // The entry artifact can register the generic custom API call
        // inline, without a dedicated action artifact.
        if meta.has_custom_api_call && !actions.iter().any(|a| a.name == "custom_api_call") {
            actions.push(custom_api_call_action());
        }

        let mut triggers: Vec<ExtractedTrigger> = scanner::trigger_files(dir)
            .iter()
            .filter_map(|path| read_artifact(path))
            .filter_map(|text| self.extractor.parse_trigger(&text))
            .collect();

        let mut display_name = meta.display_name;
        if let Some(entry) = self.fallback.get(&dir.id) {
            apply_fallback(entry, &mut actions, &mut triggers, &mut display_name);
        }

        let actions = dedup_by_name(actions);
        let triggers = dedup_by_name(triggers);

        let display_name = display_name.unwrap_or_else(|| title_case_id(&dir.id));
        let category = categories::classify(&dir.id);
        let prop_count = actions.iter().map(|a| a.props.len()).sum::<usize>()
            + triggers.iter().map(|t| t.props.len()).sum::<usize>();

        let piece = Piece {
            id: dir.id.clone(),
            package: package_for(&dir.id),
            display_name: display_name.clone(),
            display_name_ar: String::new(),
            description: meta.description.unwrap_or_default(),
            category,
            auth_type,
            actions: actions.iter().map(ExtractedAction::to_summary).collect(),
            triggers: triggers.iter().map(ExtractedTrigger::to_summary).collect(),
            verified: true,
            verified_date: Some(self.verified_date.clone()),
            source: Some(self.source_label.clone()),
        };

        let detail = PieceDetail {
            id: dir.id.clone(),
            display_name,
            auth: AuthBlock { auth_type },
            actions: actions
                .iter()
                .map(ExtractedAction::to_detail)
                .collect::<BTreeMap<_, _>>(),
            triggers: triggers
                .iter()
                .map(ExtractedTrigger::to_detail)
                .collect::<BTreeMap<_, _>>(),
        };

        tracing::debug!(
            piece = %dir.id,
            actions = piece.actions.len(),
            triggers = piece.triggers.len(),
            auth = %auth_type,
            "piece extracted"
        );

        ExtractedPiece {
            piece,
            detail,
            prop_count,
        }
    }
}

/// Human label derived from a piece id: `google-sheets` → `Google Sheets`.
fn title_case_id(id: &str) -> String {
    id.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read one artifact, soft-skipping unreadable files with a warning.
fn read_artifact(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "artifact unreadable, skipped");
            None
        }
    }
}
