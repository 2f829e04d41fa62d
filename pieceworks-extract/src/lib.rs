//! # pieceworks-extract
//!
//! Extraction-and-reconciliation engine for the pieceworks registry.
//! Recovers structured piece metadata from connector source trees by
//! pattern-based text extraction, reconciles it against the fallback
//! dataset, deduplicates, and classifies — one immutable piece record
//! per connector directory.

pub mod auth;
pub mod categories;
pub mod dedup;
pub mod extract;
pub mod fallback;
pub mod pipeline;
pub mod record;
pub mod scanner;

pub use fallback::FallbackDataset;
pub use pipeline::{ExtractedPiece, ExtractionEngine};
